use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use robotrun_core::api::{DockerRunnerConfig, ProcessOutput, RobotPaths, RobotRunner, RunnerError};

/// Runs the robot suite in a throwaway container.
pub struct DockerRobotRunner {
    cfg: DockerRunnerConfig,
    paths: RobotPaths,
}

impl DockerRobotRunner {
    pub fn new(cfg: DockerRunnerConfig, paths: RobotPaths) -> Self {
        Self { cfg, paths }
    }

    async fn clear_stale_report(&self) {
        match tokio::fs::remove_file(&self.paths.report).await {
            Ok(()) => {
                tracing::debug!(target: "robotrun.runner", path = %self.paths.report.display(), "removed stale report")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(target: "robotrun.runner", path = %self.paths.report.display(), error = %e, "could not remove stale report")
            }
        }
    }
}

/// Arguments for `docker`, without the binary itself.
pub fn docker_args(cfg: &DockerRunnerConfig, paths: &RobotPaths, url: &str) -> Vec<String> {
    let root = cfg.container_root.trim_end_matches('/');
    let results = format!("{root}/results");

    let mut args = vec![
        "run".to_string(),
        "--rm".to_string(),
        format!("--shm-size={}", cfg.shm_size),
    ];
    if let Some(user) = cfg.user.as_deref().filter(|u| !u.trim().is_empty()) {
        args.push("--user".to_string());
        args.push(user.to_string());
    }
    args.push(format!("--network={}", cfg.network));

    let mounts = [
        (&paths.logs, results.clone()),
        (&paths.tests, format!("{root}/tests")),
        (&paths.resources, format!("{root}/resources")),
        (&paths.libs, format!("{root}/libs")),
    ];
    for (host, container) in mounts {
        args.push("-v".to_string());
        args.push(format!("{}:{container}:Z", host.display()));
    }

    args.push("-e".to_string());
    args.push(format!(
        "ROBOT_OPTIONS=--variable URL:{url} --outputdir {results} --loglevel {}",
        cfg.log_level
    ));
    args.push(cfg.image.clone());
    args
}

#[async_trait]
impl RobotRunner for DockerRobotRunner {
    fn name(&self) -> &str {
        "docker"
    }

    async fn run(&self, url: &str) -> Result<ProcessOutput, RunnerError> {
        if self.cfg.clear_stale_report {
            self.clear_stale_report().await;
        }

        let args = docker_args(&self.cfg, &self.paths, url);
        tracing::info!(target: "robotrun.runner", bin = %self.cfg.docker_bin, image = %self.cfg.image, "launching robot container");
        tracing::debug!(target: "robotrun.runner", ?args, "docker arguments");

        let mut cmd = Command::new(&self.cfg.docker_bin);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| RunnerError::Spawn(format!("{}: {e}", self.cfg.docker_bin)))?;

        let output = match self.cfg.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), child.wait_with_output())
                .await
                .map_err(|_| RunnerError::Timeout {
                    secs,
                    output: String::new(),
                })??,
            None => child.wait_with_output().await?,
        };

        let output = ProcessOutput::from_process(output);
        if !output.succeeded() {
            tracing::warn!(target: "robotrun.runner", exit_code = ?output.exit_code, "robot container exited non-zero");
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn paths() -> RobotPaths {
        RobotPaths::new(Path::new("/srv/robot"), "output.xml")
    }

    #[test]
    fn builds_full_invocation() {
        let cfg = DockerRunnerConfig::default();
        let args = docker_args(&cfg, &paths(), "https://shop.example.test");
        assert_eq!(
            args,
            vec![
                "run",
                "--rm",
                "--shm-size=1g",
                "--network=host",
                "-v",
                "/srv/robot/logs:/opt/robotframework/results:Z",
                "-v",
                "/srv/robot/tests:/opt/robotframework/tests:Z",
                "-v",
                "/srv/robot/resources:/opt/robotframework/resources:Z",
                "-v",
                "/srv/robot/libs:/opt/robotframework/libs:Z",
                "-e",
                "ROBOT_OPTIONS=--variable URL:https://shop.example.test --outputdir /opt/robotframework/results --loglevel DEBUG",
                "ppodgorsek/robot-framework",
            ]
        );
    }

    #[test]
    fn user_flag_only_when_configured() {
        let cfg = DockerRunnerConfig {
            user: Some("1000:1000".into()),
            ..Default::default()
        };
        let args = docker_args(&cfg, &paths(), "http://x");
        let at = args.iter().position(|a| a == "--user").unwrap();
        assert_eq!(args[at + 1], "1000:1000");

        let blank = DockerRunnerConfig {
            user: Some("  ".into()),
            ..Default::default()
        };
        assert!(!docker_args(&blank, &paths(), "http://x").contains(&"--user".to_string()));
    }

    #[test]
    fn url_stays_a_single_argument() {
        let cfg = DockerRunnerConfig::default();
        let url = "http://x/?a=1&b=$(rm -rf /)";
        let args = docker_args(&cfg, &paths(), url);
        assert!(args.iter().any(|a| a.contains(url)));
        assert_eq!(args.len(), 15);
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DockerRunnerConfig {
            docker_bin: "/nonexistent/docker-binary".into(),
            ..Default::default()
        };
        let runner = DockerRobotRunner::new(cfg, RobotPaths::new(dir.path(), "output.xml"));
        let err = runner.run("http://x").await.unwrap_err();
        assert!(matches!(err, RunnerError::Spawn(_)));
    }

    #[tokio::test]
    async fn stale_report_is_removed_before_run() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RobotPaths::new(dir.path(), "output.xml");
        std::fs::create_dir_all(&paths.logs).unwrap();
        std::fs::write(&paths.report, "<robot/>").unwrap();

        let cfg = DockerRunnerConfig {
            docker_bin: "/nonexistent/docker-binary".into(),
            ..Default::default()
        };
        let runner = DockerRobotRunner::new(cfg, paths.clone());
        let _ = runner.run("http://x").await;
        assert!(!paths.report.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_output_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DockerRunnerConfig {
            docker_bin: "false".into(),
            clear_stale_report: false,
            ..Default::default()
        };
        let runner = DockerRobotRunner::new(cfg, RobotPaths::new(dir.path(), "output.xml"));
        let output = runner.run("http://x").await.unwrap();
        assert_eq!(output.exit_code, Some(1));
        assert_eq!(output.stdout, "Error: process exited with code 1");
    }
}
