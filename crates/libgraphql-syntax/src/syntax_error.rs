use thiserror::Error;

/// The two broad classes of [`SyntaxError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxErrorCategory {
    /// The caller passed a structurally invalid input. Always
    /// caller-fixable.
    InvalidArgument,

    /// The operation was requested on a navigator whose current stack
    /// cannot satisfy it. Signals a logic error in the traversal driver.
    InvalidState,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SyntaxError {
    #[error("Names must contain at least one character")]
    EmptyName,

    #[error("A non-null type cannot wrap another non-null type")]
    NestedNonNullType,

    #[error("Invalid schema coordinate: {reason}")]
    InvalidSchemaCoordinate {
        reason: String,
    },

    #[error("Attempted to `{operation}` on an empty syntax navigator")]
    EmptyNavigator {
        operation: &'static str,
    },

    #[error(
        "Attempted to peek {index} positions below the top of a syntax \
        navigator holding only {depth} nodes"
    )]
    PeekOutOfRange {
        index: usize,
        depth: usize,
    },

    #[error("Unable to create a schema coordinate from the current path: {reason}")]
    UnrecognizedCoordinatePath {
        reason: String,
    },
}

impl SyntaxError {
    pub fn category(&self) -> SyntaxErrorCategory {
        match self {
            Self::EmptyName
                | Self::NestedNonNullType
                | Self::InvalidSchemaCoordinate { .. }
                => SyntaxErrorCategory::InvalidArgument,

            Self::EmptyNavigator { .. }
                | Self::PeekOutOfRange { .. }
                | Self::UnrecognizedCoordinatePath { .. }
                => SyntaxErrorCategory::InvalidState,
        }
    }
}
