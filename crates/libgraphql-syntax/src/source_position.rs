use serde::Deserialize;
use serde::Serialize;

/// A single point in GraphQL source text.
///
/// This is a pure data struct with no mutation methods. Whoever produces
/// syntax nodes (a parser, or a conversion layer such as
/// [`compat_graphql_parser_v0_4`](crate::compat_graphql_parser_v0_4)) is
/// responsible for computing position values.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: character count within the current line
/// - `byte_offset`: byte offset within the whole document
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `column`: 0-based character count within the current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        column: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
