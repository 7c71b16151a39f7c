use crate::SourcePosition;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Describes where a syntax node originated in source text.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the node
/// - `end_exclusive`: Position immediately after the last character
///
/// Optionally includes a file path for the referenced source text.
///
/// Locations are informational only. Syntax nodes ignore them when
/// compared for equality.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    start_inclusive: SourcePosition,
    end_exclusive: SourcePosition,
    file_path: Option<PathBuf>,
}

impl SourceLocation {
    /// Creates a location without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a location with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width location at `position`.
    pub fn at(position: SourcePosition) -> Self {
        Self::new(position.clone(), position)
    }

    pub fn start_inclusive(&self) -> &SourcePosition {
        &self.start_inclusive
    }

    pub fn end_exclusive(&self) -> &SourcePosition {
        &self.end_exclusive
    }

    /// The file path to the source text this location refers to, if
    /// available.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the length of this location in bytes.
    pub fn len(&self) -> usize {
        self.end_exclusive.byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }

    /// Returns `true` if this location covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
