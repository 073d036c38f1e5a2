use std::sync::Arc;

use anyhow::Result;

use robotrun_core::api::{AppConfig, RobotRunner, RunnerConfig};

use crate::runner::{DockerRobotRunner, ReplayRobotRunner};

pub fn build_runner(cfg: &AppConfig) -> Result<Arc<dyn RobotRunner>> {
    match &cfg.runner {
        RunnerConfig::Docker(d_cfg) => {
            if d_cfg.image.trim().is_empty() {
                anyhow::bail!("runner.image must not be empty");
            }
            Ok(Arc::new(DockerRobotRunner::new(d_cfg.clone(), cfg.robot.paths())))
        }
        RunnerConfig::Replay(r_cfg) => {
            if r_cfg.stdout_file.as_os_str().is_empty() {
                anyhow::bail!("runner.stdout_file must be set for the replay provider");
            }
            Ok(Arc::new(ReplayRobotRunner::new(
                r_cfg.stdout_file.clone(),
                r_cfg.stderr_file.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use robotrun_core::api::{DockerRunnerConfig, ReplayRunnerConfig};

    use super::*;

    #[test]
    fn default_config_builds_docker_runner() {
        let runner = build_runner(&AppConfig::default()).unwrap();
        assert_eq!(runner.name(), "docker");
    }

    #[test]
    fn replay_provider_builds_replay_runner() {
        let cfg = AppConfig {
            runner: RunnerConfig::Replay(ReplayRunnerConfig {
                stdout_file: PathBuf::from("recorded/stdout.txt"),
                stderr_file: None,
            }),
            ..Default::default()
        };
        assert_eq!(build_runner(&cfg).unwrap().name(), "replay");
    }

    #[test]
    fn empty_image_is_rejected() {
        let cfg = AppConfig {
            runner: RunnerConfig::Docker(DockerRunnerConfig {
                image: " ".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(build_runner(&cfg).is_err());
    }
}
