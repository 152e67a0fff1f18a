//! In-memory task storage implementation
//!
//! Holds all tasks in process memory; state is rebuilt from the seed data on
//! every start.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use super::model::{TaskItem, TaskStatus};
use super::repository::TaskRepository;
use super::tags::normalize_tags;
use crate::Result;

/// Concurrency-safe in-memory task store
///
/// Ids are assigned from an atomic counter and are never reused, including
/// after deletes.
pub struct InMemoryTaskStore {
    tasks: RwLock<HashMap<i64, TaskItem>>,
    next_id: AtomicI64,
}

fn seed_tasks(now: DateTime<Utc>) -> Vec<TaskItem> {
    let mut setup = TaskItem::new("Set up project structure")
        .with_description("Create the initial workspace and crate layout")
        .with_status(TaskStatus::Done)
        .with_due_date(now - Duration::days(2))
        .with_tags(["setup", "infrastructure"]);
    setup.created_at = now - Duration::days(3);

    let mut endpoints = TaskItem::new("Implement API endpoints")
        .with_description("Build the REST API for task management")
        .with_status(TaskStatus::InProgress)
        .with_due_date(now + Duration::days(5))
        .with_tags(["backend", "api"]);
    endpoints.created_at = now - Duration::days(2);

    let mut tests = TaskItem::new("Write unit tests")
        .with_description("Add tests for the repository and endpoints")
        .with_status(TaskStatus::Todo)
        .with_due_date(now - Duration::days(1))
        .with_tags(["testing", "backend"]);
    tests.created_at = now - Duration::days(1);

    vec![setup, endpoints, tests]
}

impl InMemoryTaskStore {
    /// Create a new store pre-populated with the seed tasks (ids 1..=3)
    pub fn new() -> Self {
        let mut tasks = HashMap::new();
        let mut next_id = 0;
        for mut task in seed_tasks(Utc::now()) {
            next_id += 1;
            task.id = next_id;
            task.tags = normalize_tags(&task.tags);
            tasks.insert(next_id, task);
        }
        tracing::debug!(count = next_id, "seeded task store");

        Self {
            tasks: RwLock::new(tasks),
            next_id: AtomicI64::new(next_id),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn create(&self, mut task: TaskItem) -> Result<TaskItem> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        task.id = id;
        task.created_at = Utc::now();
        task.updated_at = None;
        task.tags = normalize_tags(&task.tags);

        let mut tasks = self.tasks.write().await;
        tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn get(&self, id: i64) -> Result<Option<TaskItem>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<TaskItem>> {
        let tasks = self.tasks.read().await;
        let mut tasks: Vec<TaskItem> = tasks.values().cloned().collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    async fn update(&self, mut task: TaskItem) -> Result<Option<TaskItem>> {
        let mut tasks = self.tasks.write().await;
        let Some(existing) = tasks.get(&task.id) else {
            return Ok(None);
        };
        task.created_at = existing.created_at;
        task.updated_at = existing.updated_at;
        task.tags = normalize_tags(&task.tags);
        tasks.insert(task.id, task.clone());
        Ok(Some(task))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }
}
