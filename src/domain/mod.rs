pub mod board;
pub mod column;
pub mod task;

pub use board::{AdvanceOutcome, Board, BoardConfig};
pub use column::Column;
pub use task::{Task, TaskPriority};
