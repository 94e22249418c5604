use async_signal::{Signal, Signals};
use futures::StreamExt;
use tokio::task::{JoinHandle, spawn};

/**
    Spawns a task that completes with the first interrupt
    or termination signal received by the process.

    Note that on Windows, only SIGINT (Ctrl+C) is supported.
*/
pub fn spawn_signal_task() -> Result<JoinHandle<Option<Signal>>, std::io::Error> {
    let mut signals = if cfg!(target_os = "windows") {
        Signals::new([Signal::Int])?
    } else {
        Signals::new([
            Signal::Int,  // Interrupt
            Signal::Term, // Terminate
        ])?
    };

    let task = spawn(async move {
        while let Some(result) = signals.next().await {
            match result {
                Ok(sig) => return Some(sig),
                Err(err) => tracing::error!("Failed to listen for signal: {err}"),
            }
        }
        None
    });

    Ok(task)
}
