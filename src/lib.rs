//! # Scrum Board
//!
//! In-memory domain model for a scrum board: a board holds an ordered
//! pipeline of columns, each column holds an ordered list of prioritized
//! tasks, and tasks advance from one column to the next.
//!
//! Titles are the keys: column titles are unique within a board and task
//! titles are unique within a column.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{AdvanceOutcome, Board, BoardConfig},
    column::Column,
    task::{Task, TaskPriority},
};
pub use error::{Result, ScrumBoardError, TitleKind};
