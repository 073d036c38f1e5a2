use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use tokio::sync::{broadcast, Mutex};

use robotrun_core::api::RobotRunner;

#[derive(Debug)]
pub struct ServerStats {
    start_time: Instant,
    pub requests_total: u64,
    pub runs_total: u64,
    pub errors_total: u64,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            requests_total: 0,
            runs_total: 0,
            errors_total: 0,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Ends a run shortly before the request timeout would drop the handler, so
/// the client still gets a hard-failure body instead of a bare 408.
pub fn run_deadline(request_timeout: Duration) -> Duration {
    let margin = (request_timeout / 10).min(Duration::from_secs(5));
    request_timeout.saturating_sub(margin)
}

#[derive(Clone)]
pub struct AppState {
    pub session_id: String,
    pub runner: Arc<dyn RobotRunner>,
    pub report_path: Arc<PathBuf>,
    pub stats: Arc<RwLock<ServerStats>>,
    /// Held for a whole run plus extraction; runs share one report path.
    pub run_lock: Arc<Mutex<()>>,
    /// Budget for waiting on `run_lock` plus the run itself.
    pub run_deadline: Duration,
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(
        session_id: String,
        runner: Arc<dyn RobotRunner>,
        report_path: Arc<PathBuf>,
        request_timeout: Duration,
        shutdown_tx: broadcast::Sender<()>,
    ) -> Self {
        Self {
            session_id,
            runner,
            report_path,
            stats: Arc::new(RwLock::new(ServerStats::new())),
            run_lock: Arc::new(Mutex::new(())),
            run_deadline: run_deadline(request_timeout),
            shutdown_tx,
        }
    }

    pub fn stats(&self) -> RwLockReadGuard<'_, ServerStats> {
        self.stats.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn stats_mut(&self) -> RwLockWriteGuard<'_, ServerStats> {
        self.stats.write().unwrap_or_else(|e| e.into_inner())
    }
}
