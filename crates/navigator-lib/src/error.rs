use thiserror::Error;

/// Convenient result alias for the navigator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a landmark name could not be found in the graph.
    #[error("unknown landmark: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no path connects the two landmarks.
    #[error("no route found between {start} and {goal}")]
    Unreachable { start: String, goal: String },

    /// Raised when graph construction input is malformed.
    #[error("invalid input at row {row}: {message}")]
    InvalidInput { row: usize, message: String },

    /// Raised when an edge carries a negative or non-finite distance.
    #[error("invalid distance {distance} between {from} and {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// Raised when an edge would connect a landmark to itself.
    #[error("edge from {name} to itself is not allowed")]
    SelfLoop { name: String },

    /// Raised when strict distance accumulation meets two nodes without an edge.
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: String, to: String },

    /// Raised when a travel conversion factor is unusable.
    #[error("invalid travel configuration: {0}")]
    InvalidConfig(String),

    /// Raised when the adjacency matrix has no header row.
    #[error("adjacency matrix is empty")]
    EmptyMatrix,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(row: usize, message: impl Into<String>) -> Self {
        Error::InvalidInput {
            row,
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
