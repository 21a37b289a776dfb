//! Progress indicator shown on stderr while suggestions are generated.

use std::io::Write;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// Elapsed time is only shown once a wait gets this long.
const SHOW_ELAPSED_AFTER: Duration = Duration::from_secs(1);

/// A spinner line that animates in a background task until stopped.
pub struct Spinner {
    handle: JoinHandle<()>,
    stop: watch::Sender<bool>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let mut tick = 0usize;
            loop {
                eprint!("\x1b[2K\r{}", frame_line(tick, &message, started.elapsed()));
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => tick += 1,
                    _ = stop_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            stop: stop_tx,
        }
    }

    /// Stop animating and clear the line.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

fn frame_line(tick: usize, message: &str, elapsed: Duration) -> String {
    let frame = FRAMES[tick % FRAMES.len()];
    if elapsed < SHOW_ELAPSED_AFTER {
        format!("{frame} {message}")
    } else {
        format!("{frame} {message} ({:.1}s)", elapsed.as_secs_f32())
    }
}
