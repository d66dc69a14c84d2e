//! In-memory per-user task lists.
//!
//! Ids are dense per user: the n-th task a user adds gets id n. Tasks are never deleted, so an id
//! is never reused. Nothing is persisted; the store lives as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::TaskError;

/// One stored unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

type TaskMap = HashMap<i64, Vec<Task>>;

/// User id → that user's tasks in insertion order. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<TaskMap>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task for `user_id`. Fails if the description is blank.
    pub async fn add_task(&self, user_id: i64, description: &str) -> Result<Task, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut tasks = self.tasks.write().await;
        let user_tasks = tasks.entry(user_id).or_default();
        let task = Task {
            id: user_tasks.len() as u64 + 1,
            description: description.to_string(),
            created_at: Utc::now(),
            completed: false,
        };
        user_tasks.push(task.clone());

        info!(user_id, task_id = task.id, "Task added");
        Ok(task)
    }

    /// All of a user's tasks in insertion order; empty for unknown users.
    pub async fn list_tasks(&self, user_id: i64) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        tasks.get(&user_id).cloned().unwrap_or_default()
    }

    /// Marks a task completed. Re-completing succeeds again without other change.
    ///
    /// `task_id` is `None` when the caller's argument was not a number; that is reported the
    /// same way as an id with no matching task.
    pub async fn complete_task(&self, user_id: i64, task_id: Option<u64>) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        let user_tasks = tasks.get_mut(&user_id).ok_or(TaskError::NoTasks)?;

        let task = task_id
            .and_then(|id| user_tasks.iter_mut().find(|t| t.id == id))
            .ok_or(TaskError::NotFound)?;
        task.completed = true;

        info!(user_id, task_id = task.id, "Task completed");
        Ok(task.clone())
    }

    /// Number of users with at least one task.
    pub async fn user_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_dense_in_submission_order() {
        let store = TaskStore::new();
        for (i, description) in ["a", "b", "c", "d"].iter().enumerate() {
            let task = store.add_task(1, description).await.unwrap();
            assert_eq!(task.id, i as u64 + 1);
        }

        let ids: Vec<u64> = store.list_tasks(1).await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_ids_are_per_user() {
        let store = TaskStore::new();
        store.add_task(1, "mine").await.unwrap();
        store.add_task(1, "mine too").await.unwrap();
        let other = store.add_task(2, "theirs").await.unwrap();

        assert_eq!(other.id, 1);
        assert_eq!(store.user_count().await, 2);
    }

    #[tokio::test]
    async fn test_blank_description_is_rejected_without_mutation() {
        let store = TaskStore::new();
        assert_eq!(store.add_task(1, "   ").await, Err(TaskError::EmptyDescription));
        assert!(store.list_tasks(1).await.is_empty());
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_new_task_is_open() {
        let store = TaskStore::new();
        let task = store.add_task(1, " buy milk ").await.unwrap();
        assert!(!task.completed);
        assert_eq!(task.description, "buy milk");
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let store = TaskStore::new();
        assert!(store.list_tasks(42).await.is_empty());
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let store = TaskStore::new();
        store.add_task(1, "walk dog").await.unwrap();

        let first = store.complete_task(1, Some(1)).await.unwrap();
        let after_first = store.list_tasks(1).await;
        let second = store.complete_task(1, Some(1)).await.unwrap();
        let after_second = store.list_tasks(1).await;

        assert!(first.completed && second.completed);
        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_complete_unknown_user_reports_no_tasks() {
        let store = TaskStore::new();
        assert_eq!(store.complete_task(9, Some(1)).await, Err(TaskError::NoTasks));
    }

    #[tokio::test]
    async fn test_complete_missing_id_does_not_mutate() {
        let store = TaskStore::new();
        store.add_task(1, "a").await.unwrap();
        let before = store.list_tasks(1).await;

        assert_eq!(store.complete_task(1, Some(5)).await, Err(TaskError::NotFound));
        assert_eq!(store.complete_task(1, None).await, Err(TaskError::NotFound));
        assert_eq!(store.list_tasks(1).await, before);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = TaskStore::new();
        let clone = store.clone();
        clone.add_task(3, "shared").await.unwrap();
        assert_eq!(store.list_tasks(3).await.len(), 1);
    }
}
