/*
[INPUT]:  Public API exports for tubetask-engine crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod executor;
pub mod selection;
pub mod session;
pub mod task;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use executor::{ExecutionOutcome, ExecutorSet, SimulatedExecutor, TaskExecutor};
pub use selection::SelectionSet;
pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, Session};
pub use task::{
    AutomationTask,
    EngineError,
    StateError,
    TaskEngine,
    TaskId,
    TaskKind,
    TaskStatus,
};
