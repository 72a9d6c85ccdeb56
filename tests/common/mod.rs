//! Shared utilities for scenario tests.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime};

/// Write `contents` to `path` and push the file's mtime `bump` into the
/// future. Successive writes in a test use increasing bumps so change
/// detection does not depend on filesystem timestamp granularity.
pub fn write_config(path: &Path, contents: &str, bump: Duration) {
    fs::write(path, contents).unwrap();
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() + bump).unwrap();
}

/// Write `contents` to `path` with an mtime in the past, so the change is
/// invisible to mtime polling and only a manual trigger can pick it up.
pub fn write_config_backdated(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(600)).unwrap();
}

/// Poll `cond` every 10ms until it holds or `timeout` elapses.
pub async fn wait_for(cond: impl Fn() -> bool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cond()
}
