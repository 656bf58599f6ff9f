use crate::{
    domain::task::Task,
    error::{Result, ScrumBoardError},
};
use serde::Serialize;

/// An ordered list of tasks with unique titles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a task, rejecting titles already present in this column
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if self.contains_task(&task.title) {
            return Err(ScrumBoardError::duplicate_task(&task.title));
        }

        tracing::debug!(column = %self.title, task = %task.title, "task added");
        self.tasks.push(task);
        Ok(())
    }

    /// Tasks in insertion order
    pub fn find_all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_task_by_title(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.title == title)
    }

    pub fn find_task_by_title_mut(&mut self, title: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.title == title)
    }

    pub fn contains_task(&self, title: &str) -> bool {
        self.find_task_by_title(title).is_some()
    }

    /// Removes every task with the given title. Missing titles are a no-op.
    pub fn remove_task_by_title(&mut self, title: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.title != title);

        if self.tasks.len() != before {
            tracing::debug!(column = %self.title, task = %title, "task removed");
        }
    }

    /// Detaches the first task with the given title and hands it back
    pub(crate) fn take_task(&mut self, title: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|task| task.title == title)?;
        Some(self.tasks.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskPriority;

    fn mock_task(title: &str) -> Task {
        Task::new(title, "alt+255", TaskPriority::Medium)
    }

    #[test]
    fn test_column_creation() {
        let column = Column::new("Backlog");

        assert_eq!(column.title(), "Backlog");
        assert!(column.find_all_tasks().is_empty());
        assert!(column.is_empty());
    }

    #[test]
    fn test_set_title() {
        let mut column = Column::new("Backlog");
        column.set_title("Updated");
        assert_eq!(column.title(), "Updated");
    }

    #[test]
    fn test_add_task() {
        let mut column = Column::new("Backlog");
        let task = mock_task("Task");

        column.add_task(task.clone()).unwrap();

        assert_eq!(column.find_all_tasks(), &[task]);
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let mut column = Column::new("Backlog");
        for i in 0..3 {
            column.add_task(mock_task(&i.to_string())).unwrap();
        }

        let titles: Vec<&str> = column
            .find_all_tasks()
            .iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(titles, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_add_duplicate_task_fails() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("Task")).unwrap();

        let mut duplicate = mock_task("Task");
        duplicate.set_description("different description");
        let err = column.add_task(duplicate).unwrap_err();

        assert!(matches!(
            err,
            ScrumBoardError::DuplicateTitle { ref title, .. } if title == "Task"
        ));
        assert_eq!(column.len(), 1);
        assert_eq!(column.find_all_tasks()[0].description, "alt+255");
    }

    #[test]
    fn test_find_existing_task() {
        let mut column = Column::new("Backlog");
        let task = mock_task("Task");
        column.add_task(task.clone()).unwrap();

        assert_eq!(column.find_task_by_title("Task"), Some(&task));
    }

    #[test]
    fn test_find_missing_task_returns_none() {
        let column = Column::new("Backlog");
        assert!(column.find_task_by_title("Why me not exist").is_none());
    }

    #[test]
    fn test_find_task_mut_edits_in_place() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("Task")).unwrap();

        column
            .find_task_by_title_mut("Task")
            .unwrap()
            .set_priority(TaskPriority::Low);

        assert_eq!(
            column.find_task_by_title("Task").unwrap().priority,
            TaskPriority::Low
        );
    }

    #[test]
    fn test_remove_existing_task() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("Task")).unwrap();

        column.remove_task_by_title("Task");

        assert!(column.is_empty());
    }

    #[test]
    fn test_remove_missing_task_is_noop() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("Task")).unwrap();

        column.remove_task_by_title("Nekaya stroka");

        assert_eq!(column.len(), 1);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("Task")).unwrap();
        column.add_task(mock_task("Other")).unwrap();
        // Renaming in place can leave two tasks sharing a title.
        column.find_task_by_title_mut("Other").unwrap().set_title("Task");

        column.remove_task_by_title("Task");

        assert!(column.is_empty());
    }

    #[test]
    fn test_take_task() {
        let mut column = Column::new("Backlog");
        column.add_task(mock_task("A")).unwrap();
        column.add_task(mock_task("B")).unwrap();

        let taken = column.take_task("A").unwrap();

        assert_eq!(taken.title, "A");
        assert_eq!(column.len(), 1);
        assert!(column.take_task("A").is_none());
    }
}
