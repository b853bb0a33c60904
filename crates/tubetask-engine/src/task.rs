/*
[INPUT]:  Task kind + video count, lifecycle config, executor set
[OUTPUT]: Automation tasks advancing pending -> running -> completed/failed
[POS]:    Execution layer - task lifecycle engine
[UPDATE]: When changing lifecycle timings or transition semantics
*/

use crate::config::EngineConfig;
use crate::executor::{ExecutionOutcome, ExecutorSet};
use crate::selection::SelectionSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Kind of automation a task performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Download,
    Playlist,
    Schedule,
}

impl TaskKind {
    /// Capitalized label used in derived task names
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Download => "Download",
            TaskKind::Playlist => "Playlist",
            TaskKind::Schedule => "Schedule",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of an automation task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Check if no further transition can leave this status
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }

    /// Check if a transition to `next` is valid
    pub fn can_advance(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Pending, TaskStatus::Running)
                | (TaskStatus::Running, TaskStatus::Completed)
                | (TaskStatus::Running, TaskStatus::Failed)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Creation-time-derived task identifier (epoch milliseconds, kept strictly
/// increasing by the engine's allocator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single automation task and its lifecycle snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationTask {
    pub id: TaskId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub status: TaskStatus,
    #[serde(rename = "videoCount")]
    pub video_count: usize,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl AutomationTask {
    /// Apply a status transition, rejecting invalid ones
    pub fn advance(&mut self, next: TaskStatus) -> Result<(), StateError> {
        if !self.status.can_advance(next) {
            return Err(StateError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Errors occurring during status transitions
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("Invalid transition: {from:?} -> {to:?}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },
}

/// Errors returned by task engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input rejected before any task was created
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Shared mutable state behind the engine handle
#[derive(Debug, Default)]
struct EngineState {
    tasks: Vec<AutomationTask>,
    last_id: u64,
}

impl EngineState {
    /// Allocate a creation-time-derived id, forced strictly increasing
    fn allocate_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = now.timestamp_millis().max(0) as u64;
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        TaskId(id)
    }
}

/// Task lifecycle engine.
///
/// Creates tasks against a mutex-guarded, newest-first history and drives
/// each one through its lifecycle with detached timer tasks. Dropping the
/// engine tears everything down: in-flight drivers hold only a weak
/// reference and quietly stop at their next transition attempt.
pub struct TaskEngine {
    state: Arc<Mutex<EngineState>>,
    executors: Arc<ExecutorSet>,
    config: EngineConfig,
}

impl TaskEngine {
    /// Create an engine with simulated executors and the given lifecycle config
    pub fn new(config: EngineConfig) -> Self {
        let executors = ExecutorSet::simulated(config.running_delay());
        Self::with_executors(config, executors)
    }

    /// Create an engine with a custom executor set
    pub fn with_executors(config: EngineConfig, executors: ExecutorSet) -> Self {
        Self {
            state: Arc::new(Mutex::new(EngineState::default())),
            executors: Arc::new(executors),
            config,
        }
    }

    /// Create a task and start driving it through its lifecycle.
    ///
    /// Returns the pending snapshot immediately; transitions happen in the
    /// background after the configured delays. A zero video count is
    /// rejected without touching the history.
    pub async fn create_task(
        &self,
        kind: TaskKind,
        video_count: usize,
    ) -> Result<AutomationTask, EngineError> {
        if video_count == 0 {
            return Err(EngineError::InvalidInput("video count must be at least 1"));
        }

        let task = {
            let mut state = self.state.lock().await;
            let now = Utc::now();
            let task = AutomationTask {
                id: state.allocate_id(now),
                name: format!("{} {} videos", kind.label(), video_count),
                kind,
                status: TaskStatus::Pending,
                video_count,
                created_at: now,
            };
            // Newest first: fresh tasks go to the front of the history.
            state.tasks.insert(0, task.clone());
            task
        };

        info!(
            task_id = %task.id,
            kind = %task.kind,
            video_count = task.video_count,
            "task created"
        );
        self.spawn_driver(task.clone());
        Ok(task)
    }

    /// Create a task sized by the current selection, then clear the selection.
    ///
    /// The selection is left untouched when creation fails.
    pub async fn create_task_from_selection(
        &self,
        kind: TaskKind,
        selection: &mut SelectionSet,
    ) -> Result<AutomationTask, EngineError> {
        let task = self.create_task(kind, selection.len()).await?;
        selection.clear();
        Ok(task)
    }

    /// Snapshot of all tasks, newest first
    pub async fn list_tasks(&self) -> Vec<AutomationTask> {
        self.state.lock().await.tasks.clone()
    }

    /// Snapshot of a single task
    pub async fn task(&self, id: TaskId) -> Option<AutomationTask> {
        self.state
            .lock()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
    }

    /// Spawn the detached driver walking one task through its lifecycle.
    ///
    /// The driver holds only a weak state handle so it cannot keep a dropped
    /// engine alive; late wakeups no-op inside `advance_status`.
    fn spawn_driver(&self, task: AutomationTask) {
        let state = Arc::downgrade(&self.state);
        let executors = Arc::clone(&self.executors);
        let pending_delay = self.config.pending_delay();

        tokio::spawn(async move {
            tokio::time::sleep(pending_delay).await;
            let Some(running) = advance_status(&state, task.id, TaskStatus::Running).await else {
                return;
            };

            let outcome = executors.for_kind(running.kind).execute(&running).await;
            let next = match outcome {
                ExecutionOutcome::Completed => TaskStatus::Completed,
                ExecutionOutcome::Failed { reason } => {
                    warn!(task_id = %running.id, reason = %reason, "task execution failed");
                    TaskStatus::Failed
                }
            };
            advance_status(&state, running.id, next).await;
        });
    }
}

/// Apply one transition to the task with the given id.
///
/// Returns the updated snapshot, or `None` when the engine has been dropped,
/// the task is missing, or the transition is no longer valid. Timer wakeups
/// arriving after teardown land here and must stay silent.
async fn advance_status(
    state: &Weak<Mutex<EngineState>>,
    id: TaskId,
    next: TaskStatus,
) -> Option<AutomationTask> {
    let Some(state) = state.upgrade() else {
        debug!(task_id = %id, status = %next, "engine dropped before transition");
        return None;
    };

    let mut state = state.lock().await;
    let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
        debug!(task_id = %id, status = %next, "task missing for transition");
        return None;
    };

    match task.advance(next) {
        Ok(()) => {
            info!(task_id = %id, status = %next, "task transitioned");
            Some(task.clone())
        }
        Err(err) => {
            debug!(task_id = %id, "transition skipped: {err}");
            None
        }
    }
}
