use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub robot: RobotConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the robot project lives on the host.
///
/// Everything the container mounts is derived from `base_path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_base_path() -> PathBuf {
    PathBuf::from("/opt/robot")
}

fn default_report_file() -> String {
    "output.xml".to_string()
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            report_file: default_report_file(),
        }
    }
}

impl RobotConfig {
    pub fn paths(&self) -> RobotPaths {
        RobotPaths::new(&self.base_path, &self.report_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotPaths {
    pub base: PathBuf,
    pub logs: PathBuf,
    pub tests: PathBuf,
    pub resources: PathBuf,
    pub libs: PathBuf,
    pub report: PathBuf,
}

impl RobotPaths {
    pub fn new(base: &Path, report_file: &str) -> Self {
        let logs = base.join("logs");
        Self {
            base: base.to_path_buf(),
            report: logs.join(report_file),
            tests: base.join("tests"),
            resources: base.join("resources"),
            libs: base.join("libs"),
            logs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum RunnerConfig {
    #[serde(rename = "docker")]
    Docker(DockerRunnerConfig),
    #[serde(rename = "replay")]
    Replay(ReplayRunnerConfig),
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig::Docker(DockerRunnerConfig::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerRunnerConfig {
    #[serde(default = "default_docker_bin")]
    pub docker_bin: String,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default = "default_shm_size")]
    pub shm_size: String,

    #[serde(default = "default_network")]
    pub network: String,

    /// `uid:gid` passed to `--user`; omitted when unset.
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_container_root")]
    pub container_root: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_clear_stale_report")]
    pub clear_stale_report: bool,
}

fn default_docker_bin() -> String {
    "docker".to_string()
}

fn default_image() -> String {
    "ppodgorsek/robot-framework".to_string()
}

fn default_shm_size() -> String {
    "1g".to_string()
}

fn default_network() -> String {
    "host".to_string()
}

fn default_log_level() -> String {
    "DEBUG".to_string()
}

fn default_container_root() -> String {
    "/opt/robotframework".to_string()
}

fn default_clear_stale_report() -> bool {
    true
}

impl Default for DockerRunnerConfig {
    fn default() -> Self {
        Self {
            docker_bin: default_docker_bin(),
            image: default_image(),
            shm_size: default_shm_size(),
            network: default_network(),
            user: None,
            log_level: default_log_level(),
            container_root: default_container_root(),
            timeout_secs: None,
            clear_stale_report: default_clear_stale_report(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReplayRunnerConfig {
    pub stdout_file: PathBuf,
    #[serde(default)]
    pub stderr_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on a whole request, including the robot run.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    900
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Daily rolling log files are written here when set.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_logging_level(),
            directory: None,
        }
    }
}
