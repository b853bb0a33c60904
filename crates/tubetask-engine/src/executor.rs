/*
[INPUT]:  Automation tasks ready to run
[OUTPUT]: Execution outcomes, dispatched per task kind
[POS]:    Execution layer - pluggable task executors
[UPDATE]: When adding real download/playlist/schedule backends
*/

use crate::task::{AutomationTask, TaskKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Result of a task's work phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Completed,
    Failed { reason: String },
}

/// Work phase of a task, between running and its terminal status.
///
/// Implementations report an outcome and never touch task state directly;
/// the engine applies the resulting transition.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, task: &AutomationTask) -> ExecutionOutcome;
}

/// Executor that simulates work with a fixed delay and always completes.
///
/// No executor in this crate reports `Failed`; the variant exists for real
/// backends plugged in through [`ExecutorSet`].
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    run_delay: Duration,
}

impl SimulatedExecutor {
    pub fn new(run_delay: Duration) -> Self {
        Self { run_delay }
    }
}

#[async_trait]
impl TaskExecutor for SimulatedExecutor {
    async fn execute(&self, task: &AutomationTask) -> ExecutionOutcome {
        debug!(
            task_id = %task.id,
            delay_ms = self.run_delay.as_millis() as u64,
            "simulated execution"
        );
        tokio::time::sleep(self.run_delay).await;
        ExecutionOutcome::Completed
    }
}

/// One executor per task kind
pub struct ExecutorSet {
    download: Arc<dyn TaskExecutor>,
    playlist: Arc<dyn TaskExecutor>,
    schedule: Arc<dyn TaskExecutor>,
}

impl ExecutorSet {
    /// Build a set using the same executor for every kind
    pub fn uniform(executor: Arc<dyn TaskExecutor>) -> Self {
        Self {
            download: Arc::clone(&executor),
            playlist: Arc::clone(&executor),
            schedule: executor,
        }
    }

    /// Build a set of simulated executors sharing one run delay
    pub fn simulated(run_delay: Duration) -> Self {
        Self::uniform(Arc::new(SimulatedExecutor::new(run_delay)))
    }

    /// Build a set with a dedicated executor per kind
    pub fn per_kind(
        download: Arc<dyn TaskExecutor>,
        playlist: Arc<dyn TaskExecutor>,
        schedule: Arc<dyn TaskExecutor>,
    ) -> Self {
        Self {
            download,
            playlist,
            schedule,
        }
    }

    /// Executor responsible for the given kind
    pub fn for_kind(&self, kind: TaskKind) -> &dyn TaskExecutor {
        match kind {
            TaskKind::Download => self.download.as_ref(),
            TaskKind::Playlist => self.playlist.as_ref(),
            TaskKind::Schedule => self.schedule.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskId, TaskStatus};
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingExecutor {
        calls: AtomicUsize,
    }

    impl CountingExecutor {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TaskExecutor for CountingExecutor {
        async fn execute(&self, _task: &AutomationTask) -> ExecutionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ExecutionOutcome::Completed
        }
    }

    fn sample_task(kind: TaskKind) -> AutomationTask {
        AutomationTask {
            id: TaskId(1),
            name: format!("{} 1 videos", kind.label()),
            kind,
            status: TaskStatus::Running,
            video_count: 1,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_for_kind_dispatches_to_matching_executor() {
        let download = CountingExecutor::new();
        let playlist = CountingExecutor::new();
        let schedule = CountingExecutor::new();
        let set = ExecutorSet::per_kind(download.clone(), playlist.clone(), schedule.clone());

        set.for_kind(TaskKind::Playlist)
            .execute(&sample_task(TaskKind::Playlist))
            .await;
        set.for_kind(TaskKind::Playlist)
            .execute(&sample_task(TaskKind::Playlist))
            .await;
        set.for_kind(TaskKind::Schedule)
            .execute(&sample_task(TaskKind::Schedule))
            .await;

        assert_eq!(download.calls.load(Ordering::SeqCst), 0);
        assert_eq!(playlist.calls.load(Ordering::SeqCst), 2);
        assert_eq!(schedule.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_executor_completes_after_delay() {
        let executor = SimulatedExecutor::new(Duration::from_millis(2000));
        let outcome = executor.execute(&sample_task(TaskKind::Download)).await;
        assert_eq!(outcome, ExecutionOutcome::Completed);
    }

    #[tokio::test]
    async fn test_uniform_set_serves_all_kinds() {
        let executor = CountingExecutor::new();
        let set = ExecutorSet::uniform(executor.clone());

        for kind in [TaskKind::Download, TaskKind::Playlist, TaskKind::Schedule] {
            set.for_kind(kind).execute(&sample_task(kind)).await;
        }

        assert_eq!(executor.calls.load(Ordering::SeqCst), 3);
    }
}
