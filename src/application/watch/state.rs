//! Watch supervisor state and timing constants

use std::time::Duration;

use serde::Serialize;

/// Fixed wait between an unexpected exit and the next spawn
pub const RESTART_DELAY: Duration = Duration::from_secs(1);

/// How often the supervisor checks whether the process has exited
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long a stopping process gets to exit before it is killed
pub const STOP_GRACE: Duration = Duration::from_secs(2);

/// Lifecycle of a watch supervisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchState {
    #[default]
    Stopped,
    Running,
    /// Waiting out the restart delay (or for a source folder to appear)
    Restarting,
}

impl std::fmt::Display for WatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchState::Stopped => write!(f, "stopped"),
            WatchState::Running => write!(f, "running"),
            WatchState::Restarting => write!(f, "restarting"),
        }
    }
}

/// Human wording for a restart delay, used in the restart log line
pub fn describe_delay(delay: Duration) -> String {
    let millis = delay.as_millis();
    if millis % 1000 != 0 {
        return format!("{} ms", millis);
    }
    match delay.as_secs() {
        1 => "1 second".to_string(),
        secs => format!("{} seconds", secs),
    }
}
