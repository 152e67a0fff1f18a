//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::TaskItem;
use crate::Result;

/// Repository interface for task CRUD operations
///
/// A missing id is a normal outcome, signalled through `Option`/`bool` rather
/// than an error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task; the caller-supplied id is ignored and a fresh one
    /// is assigned
    async fn create(&self, task: TaskItem) -> Result<TaskItem>;

    /// Get a task by ID
    async fn get(&self, id: i64) -> Result<Option<TaskItem>>;

    /// Get all tasks, ordered by ascending id
    async fn list(&self) -> Result<Vec<TaskItem>>;

    /// Replace an existing task's mutable fields wholesale, returning `None`
    /// when the id is unknown
    async fn update(&self, task: TaskItem) -> Result<Option<TaskItem>>;

    /// Delete a task by ID, returning whether anything was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}
