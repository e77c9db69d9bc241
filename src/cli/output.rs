//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::checker::{Candidate, CheckerStats};
use crate::cli::args::{EmendArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub input: String,
    pub output: String,
    pub duration_ms: u64,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub candidates: Vec<Candidate>,
}

/// Human-readable rendering of a command result.
pub trait HumanFormat {
    /// Render the result for terminal output.
    fn human(&self) -> String;
}

impl HumanFormat for CheckResult {
    fn human(&self) -> String {
        self.output.clone()
    }
}

impl HumanFormat for SuggestResult {
    fn human(&self) -> String {
        if self.candidates.is_empty() {
            return format!("No candidates for '{}'", self.word);
        }

        let mut lines = vec![format!("Candidates for '{}':", self.word)];
        for candidate in &self.candidates {
            lines.push(format!("  {} (distance {})", candidate.word, candidate.distance));
        }
        lines.join("\n")
    }
}

impl HumanFormat for CheckerStats {
    fn human(&self) -> String {
        format!(
            "Dictionary words: {}\nCosts: insert={} delete={} replace={} transpose={}\nThreshold: {}",
            self.vocabulary_words,
            self.costs.insert,
            self.costs.delete,
            self.costs.replace,
            self.costs.transpose,
            self.costs.threshold,
        )
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanFormat>(result: &T, args: &EmendArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EmendArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_human_is_the_corrected_string() {
        let result = CheckResult {
            input: "speling".to_string(),
            output: "spelling".to_string(),
            duration_ms: 3,
        };
        assert_eq!(result.human(), "spelling");
    }

    #[test]
    fn test_suggest_result_human() {
        let result = SuggestResult {
            word: "cot".to_string(),
            candidates: vec![Candidate::new("cat", 1), Candidate::new("coat", 1)],
        };
        let text = result.human();
        assert!(text.contains("cat (distance 1)"));
        assert!(text.contains("coat (distance 1)"));

        let empty = SuggestResult {
            word: "zzz".to_string(),
            candidates: vec![],
        };
        assert!(empty.human().contains("No candidates"));
    }
}
