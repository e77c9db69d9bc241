//! Corpus chunk producers.

use std::io::Read;

use crate::error::Result;

/// Default chunk size for block-wise corpus reads.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// A producer of corpus text chunks.
///
/// The dictionary pipeline only requires a stream of text; where the text
/// comes from (a file, an already-decompressed archive entry, an in-memory
/// string) is up to the implementation. Sources are consumed exactly once.
pub trait CorpusSource: Send {
    /// Produce the next chunk of corpus text, or `None` when exhausted.
    ///
    /// Any error aborts dictionary construction; there is no partial
    /// recovery.
    fn next_chunk(&mut self) -> Result<Option<String>>;
}

/// A corpus source reading fixed-size blocks from any [`Read`] stream.
///
/// Bytes are decoded as UTF-8 with invalid sequences replaced; the reference
/// corpora are ASCII text, where the decode is exact.
pub struct TextSource<R: Read + Send> {
    reader: R,
    block_size: usize,
}

impl<R: Read + Send> TextSource<R> {
    /// Create a source reading `DEFAULT_BLOCK_SIZE`-byte blocks.
    pub fn new(reader: R) -> Self {
        Self::with_block_size(reader, DEFAULT_BLOCK_SIZE)
    }

    /// Create a source with a custom block size.
    pub fn with_block_size(reader: R, block_size: usize) -> Self {
        TextSource {
            reader,
            block_size: block_size.max(1),
        }
    }
}

impl<R: Read + Send> CorpusSource for TextSource<R> {
    fn next_chunk(&mut self) -> Result<Option<String>> {
        let mut buffer = vec![0u8; self.block_size];
        let mut filled = 0;

        // Fill the block as far as the reader allows; a short read is not
        // end-of-stream until read returns zero.
        while filled < self.block_size {
            let n = self.reader.read(&mut buffer[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == 0 {
            return Ok(None);
        }

        buffer.truncate(filled);
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }
}

/// An in-memory corpus source, chunked on character boundaries.
///
/// Mainly useful in tests and for small embedded corpora.
pub struct StaticSource {
    text: String,
    position: usize,
    block_size: usize,
}

impl StaticSource {
    /// Create a source over the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_block_size(text, DEFAULT_BLOCK_SIZE)
    }

    /// Create a source with a custom block size.
    pub fn with_block_size<S: Into<String>>(text: S, block_size: usize) -> Self {
        StaticSource {
            text: text.into(),
            position: 0,
            block_size: block_size.max(1),
        }
    }
}

impl CorpusSource for StaticSource {
    fn next_chunk(&mut self) -> Result<Option<String>> {
        if self.position >= self.text.len() {
            return Ok(None);
        }

        let mut end = (self.position + self.block_size).min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end += 1;
        }

        let chunk = self.text[self.position..end].to_string();
        self.position = end;
        Ok(Some(chunk))
    }
}
