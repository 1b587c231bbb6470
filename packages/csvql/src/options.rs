//! CSV dialect configuration.

use csv::{ReaderBuilder, Trim};

/// CSV dialect options for one load.
///
/// Constructed by the caller, read-only afterwards; every field maps onto
/// the underlying [`csv`] reader.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter byte (default `,`)
    pub delimiter: u8,
    /// If true, exactly one record is consumed and discarded before data
    /// rows begin (default false)
    pub has_header_row: bool,
    /// Lines starting with this byte are skipped by the reader
    /// (default disabled)
    pub comment_character: Option<u8>,
    /// Trim whitespace around every field (default false)
    pub trim_leading_space: bool,
    /// Tolerate malformed quoting instead of failing the load. The bundled
    /// reader recovers from stray quotes unconditionally, so disabling this
    /// currently has no effect (default false)
    pub use_lazy_quotes: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header_row: false,
            comment_character: None,
            trim_leading_space: false,
            use_lazy_quotes: false,
        }
    }
}

impl CsvOptions {
    /// Builds the configured CSV reader factory.
    ///
    /// The reader is always flexible about record width; width checking
    /// happens during row coercion so a short record surfaces as a shape
    /// error rather than a lexer error.
    pub(crate) fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_header_row)
            .comment(self.comment_character)
            .trim(if self.trim_leading_space {
                Trim::All
            } else {
                Trim::None
            })
            .flexible(true);
        builder
    }
}
