//! Edit operation costs and the correction threshold.

use serde::{Deserialize, Serialize};

/// Costs of the four edit operations, plus the correction threshold.
///
/// The threshold is the maximum accepted distance for a dictionary entry to
/// be offered as a correction. Costs and threshold are unsigned, so the
/// non-negativity invariant holds by construction.
///
/// # Examples
///
/// ```
/// use emend::distance::EditCosts;
///
/// let costs = EditCosts::default();
/// assert_eq!(costs.insert, 1);
/// assert_eq!(costs.threshold, 2);
///
/// let strict = EditCosts::default().with_replace(2).with_threshold(1);
/// assert_eq!(strict.replace, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCosts {
    /// Cost of inserting a character.
    pub insert: usize,
    /// Cost of deleting a character.
    pub delete: usize,
    /// Cost of replacing a character (0 when the characters are equal).
    pub replace: usize,
    /// Cost of transposing two characters.
    pub transpose: usize,
    /// Maximum accepted distance for a correction to be applied.
    pub threshold: usize,
}

impl EditCosts {
    /// Create a cost model with explicit per-operation costs and threshold.
    pub fn new(
        insert: usize,
        delete: usize,
        replace: usize,
        transpose: usize,
        threshold: usize,
    ) -> Self {
        EditCosts {
            insert,
            delete,
            replace,
            transpose,
            threshold,
        }
    }

    /// Set the insert cost.
    pub fn with_insert(mut self, cost: usize) -> Self {
        self.insert = cost;
        self
    }

    /// Set the delete cost.
    pub fn with_delete(mut self, cost: usize) -> Self {
        self.delete = cost;
        self
    }

    /// Set the replace cost.
    pub fn with_replace(mut self, cost: usize) -> Self {
        self.replace = cost;
        self
    }

    /// Set the transpose cost.
    pub fn with_transpose(mut self, cost: usize) -> Self {
        self.transpose = cost;
        self
    }

    /// Set the correction threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// The largest single-operation cost, never less than 1.
    ///
    /// Used to scale the sentinel value in the distance matrix so that no
    /// real edit path can reach a sentinel cell.
    pub(crate) fn max_operation_cost(&self) -> usize {
        self.insert
            .max(self.delete)
            .max(self.replace)
            .max(self.transpose)
            .max(1)
    }
}

impl Default for EditCosts {
    fn default() -> Self {
        EditCosts {
            insert: 1,
            delete: 1,
            replace: 1,
            transpose: 1,
            threshold: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_costs() {
        let costs = EditCosts::default();
        assert_eq!(costs.insert, 1);
        assert_eq!(costs.delete, 1);
        assert_eq!(costs.replace, 1);
        assert_eq!(costs.transpose, 1);
        assert_eq!(costs.threshold, 2);
    }

    #[test]
    fn test_builder_setters() {
        let costs = EditCosts::default()
            .with_insert(3)
            .with_delete(4)
            .with_replace(5)
            .with_transpose(6)
            .with_threshold(7);
        assert_eq!(costs, EditCosts::new(3, 4, 5, 6, 7));
    }

    #[test]
    fn test_max_operation_cost() {
        assert_eq!(EditCosts::default().max_operation_cost(), 1);
        assert_eq!(EditCosts::default().with_delete(9).max_operation_cost(), 9);
        // All-zero costs still scale the sentinel by at least one.
        assert_eq!(EditCosts::new(0, 0, 0, 0, 0).max_operation_cost(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let costs = EditCosts::default().with_threshold(3);
        let json = serde_json::to_string(&costs).unwrap();
        let back: EditCosts = serde_json::from_str(&json).unwrap();
        assert_eq!(costs, back);
    }

    #[test]
    fn test_negative_costs_rejected_at_parse() {
        let result: Result<EditCosts, _> = serde_json::from_str(
            r#"{"insert":-1,"delete":1,"replace":1,"transpose":1,"threshold":2}"#,
        );
        assert!(result.is_err());
    }
}
