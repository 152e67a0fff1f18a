//! Task API endpoints
//!
//! RESTful API for task CRUD operations and derived views.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tt_core::task::{query, TaskItem, TaskRepository, TaskStatus};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full-replacement payload: omitted fields overwrite the stored values with
/// their defaults, they are not merged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub due_date: Option<String>,
    pub tags: Vec<String>,
}

impl From<TaskItem> for TaskResponse {
    fn from(task: TaskItem) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.map(|t| t.to_rfc3339()),
            due_date: task.due_date.map(|t| t.to_rfc3339()),
            tags: task.tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagSummaryResponse {
    pub tag: String,
    pub count: usize,
}

impl From<query::TagCount> for TagSummaryResponse {
    fn from(count: query::TagCount) -> Self {
        Self {
            tag: count.tag,
            count: count.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(err: tt_core::Error) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn not_found(id: i64) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Task {} not found", id),
        }),
    )
}

fn blank_title() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Title cannot be empty".to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List all tasks, optionally filtered by tag
async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.task_store().list().await.map_err(internal_error)?;

    let tasks = match params.tag.as_deref() {
        Some(tag) if !tag.trim().is_empty() => query::filter_by_tag(&tasks, tag),
        _ => tasks,
    };

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// GET /api/tasks/overdue - List incomplete tasks past their due date
async fn list_overdue_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.task_store().list().await.map_err(internal_error)?;
    let overdue = query::overdue(&tasks, Utc::now());

    Ok(Json(overdue.into_iter().map(TaskResponse::from).collect()))
}

/// GET /api/tasks/tags - Per-tag occurrence counts across all tasks
async fn list_tag_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagSummaryResponse>>, ApiError> {
    let tasks = state.task_store().list().await.map_err(internal_error)?;
    let summary = query::tag_summary(&tasks);

    Ok(Json(
        summary.into_iter().map(TagSummaryResponse::from).collect(),
    ))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.task_store().get(id).await.map_err(internal_error)?;

    match task {
        Some(t) => Ok(Json(TaskResponse::from(t))),
        None => Err(not_found(id)),
    }
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(blank_title());
    }

    let mut task = TaskItem::new(req.title).with_tags(req.tags);

    if let Some(desc) = req.description {
        task = task.with_description(desc);
    }

    if let Some(status) = req.status {
        task = task.with_status(status);
    }

    if let Some(due_date) = req.due_date {
        task = task.with_due_date(due_date);
    }

    let created = state
        .task_store()
        .create(task)
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// PUT /api/tasks/:id - Replace a task's mutable fields wholesale
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(blank_title());
    }

    let mut task = TaskItem::new(req.title)
        .with_status(req.status)
        .with_tags(req.tags);
    task.id = id;
    task.description = req.description;
    task.due_date = req.due_date;

    let updated = state
        .task_store()
        .update(task)
        .await
        .map_err(internal_error)?;

    match updated {
        Some(t) => Ok(Json(TaskResponse::from(t))),
        None => Err(not_found(id)),
    }
}

/// DELETE /api/tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .task_store()
        .delete(id)
        .await
        .map_err(internal_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/overdue", get(list_overdue_tasks))
        .route("/api/tasks/tags", get(list_tag_summary))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
