use std::path::Path;

use anyhow::anyhow;

use super::types::{AppConfig, RunnerConfig};
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads `path` (or `config.toml` when it exists) and applies env overrides.
///
/// An explicitly requested file that is missing is an error; a missing
/// default file just means "use defaults".
pub fn load_from(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            read_toml(p)?
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            read_toml(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    validate(&cfg)?;
    Ok(cfg)
}

fn read_toml(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.into()))?;
    toml::from_str::<AppConfig>(&s).map_err(|e| ConfigError::Parse(e.into()))
}

pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("ROBOT_PATH") {
        cfg.robot.base_path = v.into();
    }
    if let Some(v) = get("ROBOTRUN_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = get("ROBOTRUN_PORT") {
        cfg.http_server.port = v.trim().parse().map_err(|e| ConfigError::EnvInvalid {
            key: "ROBOTRUN_PORT".to_string(),
            source: anyhow!("{e}: {v}"),
        })?;
    }
    if let Some(v) = get("ROBOTRUN_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = get("ROBOTRUN_IMAGE") {
        if let RunnerConfig::Docker(ref mut docker) = cfg.runner {
            docker.image = v;
        }
    }

    Ok(())
}

fn validate(cfg: &AppConfig) -> Result<(), ConfigError> {
    if cfg.robot.report_file.trim().is_empty() {
        return Err(ConfigError::Validation("robot.report_file is empty".into()));
    }
    if let RunnerConfig::Replay(replay) = &cfg.runner {
        if replay.stdout_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "runner.stdout_file is required for the replay provider".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn robot_path_env_moves_every_derived_path() {
        let vars = env(&[("ROBOT_PATH", "/srv/robot")]);
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| vars.get(k).cloned()).unwrap();

        let paths = cfg.robot.paths();
        assert_eq!(paths.logs, PathBuf::from("/srv/robot/logs"));
        assert_eq!(paths.tests, PathBuf::from("/srv/robot/tests"));
        assert_eq!(paths.report, PathBuf::from("/srv/robot/logs/output.xml"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let vars = env(&[("ROBOT_PATH", "  "), ("ROBOTRUN_HOST", "")]);
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(cfg.robot.base_path, PathBuf::from("/opt/robot"));
        assert_eq!(cfg.http_server.host, "127.0.0.1");
    }

    #[test]
    fn invalid_port_is_reported_with_its_key() {
        let vars = env(&[("ROBOTRUN_PORT", "eighty")]);
        let mut cfg = AppConfig::default();
        let err = apply_env_overrides(&mut cfg, |k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::EnvInvalid { ref key, .. } if key == "ROBOTRUN_PORT"));
    }

    #[test]
    fn toml_file_selects_replay_runner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robotrun.toml");
        std::fs::write(
            &path,
            r#"
[robot]
base_path = "/data/robot"

[runner]
provider = "replay"
stdout_file = "/tmp/console.txt"

[http_server]
port = 8088
"#,
        )
        .unwrap();

        let cfg = read_toml(&path).unwrap();
        assert_eq!(cfg.http_server.port, 8088);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
        match cfg.runner {
            RunnerConfig::Replay(r) => assert_eq!(r.stdout_file, PathBuf::from("/tmp/console.txt")),
            other => panic!("expected replay runner, got {other:?}"),
        }
    }

    #[test]
    fn explicit_missing_file_is_not_found() {
        let err = load_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
