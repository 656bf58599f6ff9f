use crate::{
    domain::{
        column::Column,
        task::{Task, TaskPriority},
    },
    error::{Result, ScrumBoardError},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Board configuration: a title and the column titles, in pipeline order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub title: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Scrum Board".to_string(),
            columns: vec!["To Do".to_string(), "Doing".to_string(), "Done".to_string()],
        }
    }
}

impl BoardConfig {
    /// Parses a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        if config.title.trim().is_empty() {
            return Err(ScrumBoardError::Config(
                "board title must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Reads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// Result of advancing a task one column to the right
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The task was appended to the next column
    Moved { from: String, to: String },
    /// The task was in the last column and is no longer on the board
    LeftBoard(Task),
}

/// A scrum board: an ordered pipeline of at most [`Board::MAX_COLUMNS`] columns.
///
/// Column order is the order of addition, and advancing a task moves it to
/// the column that follows its current one.
///
/// ```
/// use scrum_board::{AdvanceOutcome, Board, Column, Task, TaskPriority};
///
/// let mut board = Board::new("Barracks");
/// board.add_column(Column::new("In queue")).unwrap();
/// board.add_column(Column::new("Training")).unwrap();
///
/// board
///     .add_task_to_column(Task::new("Rifleman", "Ground ranged unit", TaskPriority::Medium), None)
///     .unwrap();
///
/// let outcome = board.advance_task("In queue", "Rifleman").unwrap();
/// assert!(matches!(outcome, AdvanceOutcome::Moved { .. }));
/// assert!(board.find_column_by_title("Training").unwrap().contains_task("Rifleman"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    title: String,
    columns: Vec<Column>,
}

impl Board {
    pub const MAX_COLUMNS: usize = 10;

    /// Creates a board with no columns
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Creates a board with the configured columns, applying the same checks as [`Board::add_column`]
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let mut board = Self::new(config.title.clone());
        for title in &config.columns {
            board.add_column(Column::new(title.clone()))?;
        }
        Ok(board)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.len() >= Self::MAX_COLUMNS {
            return Err(ScrumBoardError::ColumnCountExceeded {
                max: Self::MAX_COLUMNS,
            });
        }

        if self.find_column_by_title(column.title()).is_some() {
            return Err(ScrumBoardError::duplicate_column(column.title()));
        }

        tracing::debug!(board = %self.title, column = %column.title(), "column added");
        self.columns.push(column);
        Ok(())
    }

    /// Columns in insertion order
    pub fn find_all_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn find_column_by_title(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.title() == title)
    }

    pub fn find_column_by_title_mut(&mut self, title: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.title() == title)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Adds a task to the named column, or to the first column when no title is given
    pub fn add_task_to_column(&mut self, task: Task, column_title: Option<&str>) -> Result<()> {
        let column = match column_title {
            None => self
                .columns
                .first_mut()
                .ok_or(ScrumBoardError::NoColumns)?,
            Some(title) => {
                if self.columns.is_empty() {
                    return Err(ScrumBoardError::NoColumns);
                }
                self.column_mut(title)?
            }
        };

        column.add_task(task)
    }

    /// Moves a task to the end of the next column.
    ///
    /// A task advanced out of the last column is removed from the board and
    /// returned in [`AdvanceOutcome::LeftBoard`]. If the next column already
    /// holds a task with the same title, nothing is moved.
    pub fn advance_task(&mut self, column_title: &str, task_title: &str) -> Result<AdvanceOutcome> {
        if self.columns.is_empty() {
            return Err(ScrumBoardError::NoColumns);
        }

        let index = self
            .columns
            .iter()
            .position(|column| column.title() == column_title)
            .ok_or_else(|| ScrumBoardError::ColumnNotFound(column_title.to_string()))?;

        if !self.columns[index].contains_task(task_title) {
            return Err(ScrumBoardError::TaskNotFound(task_title.to_string()));
        }

        if let Some(next) = self.columns.get(index + 1) {
            if next.contains_task(task_title) {
                return Err(ScrumBoardError::duplicate_task(task_title));
            }
        }

        let task = self.columns[index]
            .take_task(task_title)
            .ok_or_else(|| ScrumBoardError::TaskNotFound(task_title.to_string()))?;

        match self.columns.get_mut(index + 1) {
            Some(next) => {
                let to = next.title().to_string();
                next.add_task(task)?;
                tracing::debug!(task = %task_title, from = %column_title, to = %to, "task advanced");
                Ok(AdvanceOutcome::Moved {
                    from: column_title.to_string(),
                    to,
                })
            }
            None => {
                tracing::info!(task = %task_title, from = %column_title, "task advanced past the last column");
                Ok(AdvanceOutcome::LeftBoard(task))
            }
        }
    }

    /// Removes a task from a column. A missing task is not an error.
    pub fn remove_task(&mut self, column_title: &str, task_title: &str) -> Result<()> {
        self.column_mut(column_title)?.remove_task_by_title(task_title);
        Ok(())
    }

    /// Renames a column. The new title is not checked against the other columns.
    pub fn change_column_title(&mut self, column_title: &str, new_title: &str) -> Result<()> {
        let clashes = self.find_column_by_title(new_title).is_some() && column_title != new_title;
        let column = self.column_mut(column_title)?;

        if clashes {
            tracing::warn!(column = %column_title, new_title = %new_title, "renamed column shares its title with another column");
        }

        column.set_title(new_title);
        tracing::debug!(column = %column_title, new_title = %new_title, "column renamed");
        Ok(())
    }

    /// Renames a task. The new title is not checked against the column's other tasks.
    pub fn change_task_title(
        &mut self,
        column_title: &str,
        task_title: &str,
        new_title: &str,
    ) -> Result<()> {
        let column = self.column_mut(column_title)?;
        let clashes = column.contains_task(new_title) && task_title != new_title;

        let task = column
            .find_task_by_title_mut(task_title)
            .ok_or_else(|| ScrumBoardError::TaskNotFound(task_title.to_string()))?;

        if clashes {
            tracing::warn!(column = %column_title, task = %task_title, new_title = %new_title, "renamed task shares its title with another task");
        }

        task.set_title(new_title);
        Ok(())
    }

    pub fn change_task_description(
        &mut self,
        column_title: &str,
        task_title: &str,
        new_description: &str,
    ) -> Result<()> {
        self.task_mut(column_title, task_title)?
            .set_description(new_description);
        Ok(())
    }

    pub fn change_task_priority(
        &mut self,
        column_title: &str,
        task_title: &str,
        new_priority: TaskPriority,
    ) -> Result<()> {
        self.task_mut(column_title, task_title)?
            .set_priority(new_priority);
        Ok(())
    }

    /// Renders the board as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn column_mut(&mut self, title: &str) -> Result<&mut Column> {
        self.find_column_by_title_mut(title)
            .ok_or_else(|| ScrumBoardError::ColumnNotFound(title.to_string()))
    }

    fn task_mut(&mut self, column_title: &str, task_title: &str) -> Result<&mut Task> {
        self.column_mut(column_title)?
            .find_task_by_title_mut(task_title)
            .ok_or_else(|| ScrumBoardError::TaskNotFound(task_title.to_string()))
    }
}

impl Default for Board {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            title: config.title,
            columns: config.columns.into_iter().map(Column::new).collect(),
        }
    }
}
