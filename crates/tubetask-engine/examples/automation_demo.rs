/*
[INPUT]:  None (runs fully simulated)
[OUTPUT]: Printed task lifecycle progress
[POS]:    Examples - end-to-end engine walkthrough
[UPDATE]: When the engine surface changes
*/

use anyhow::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tubetask_engine::{EngineConfig, Session, TaskEngine, TaskKind};

/// Example: drive simulated automation tasks through their lifecycle
///
/// Uses the in-memory credential store; nothing touches the network or disk.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    println!("=== Automation Engine Demo ===\n");

    let mut session = Session::in_memory();
    session.set_credential("demo-key").await?;
    println!("✓ Session configured: {}", session.is_configured().await?);

    let selection = session.selection_mut();
    selection.toggle("video-aaa");
    selection.toggle("video-bbb");
    selection.toggle("video-ccc");
    println!("✓ Selected {} videos\n", session.selection().len());

    let engine = TaskEngine::new(EngineConfig::default());
    let task = engine
        .create_task_from_selection(TaskKind::Download, session.selection_mut())
        .await?;
    println!("✓ Created task \"{}\" (id {})", task.name, task.id);
    println!("  Selection now holds {} videos\n", session.selection().len());

    // Watch the task advance; defaults complete after three seconds.
    loop {
        sleep_tick().await;
        let Some(snapshot) = engine.task(task.id).await else {
            break;
        };
        println!("  status = {}", snapshot.status);
        if snapshot.status.is_terminal() {
            break;
        }
    }

    let tasks = engine.list_tasks().await;
    println!("\n✓ {} task(s) in history, newest first", tasks.len());
    for task in &tasks {
        println!("  [{}] {} - {}", task.id, task.name, task.status);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn sleep_tick() {
    tokio::time::sleep(Duration::from_millis(500)).await;
}
