use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrumBoardError>;

#[derive(Debug, Error)]
pub enum ScrumBoardError {
    #[error("Duplicate {kind} title: {title}")]
    DuplicateTitle { kind: TitleKind, title: String },

    #[error("Column count exceeded (max {max})")]
    ColumnCountExceeded { max: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Board has no columns")]
    NoColumns,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Which collection rejected a duplicate title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Column,
    Task,
}

impl std::fmt::Display for TitleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Task => write!(f, "task"),
        }
    }
}

impl ScrumBoardError {
    pub(crate) fn duplicate_column(title: &str) -> Self {
        Self::DuplicateTitle {
            kind: TitleKind::Column,
            title: title.to_string(),
        }
    }

    pub(crate) fn duplicate_task(title: &str) -> Self {
        Self::DuplicateTitle {
            kind: TitleKind::Task,
            title: title.to_string(),
        }
    }
}
