use std::path::Path;
use std::process::{Command, Stdio};

use log::info;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("script not found: {0}")]
    NotFound(String),
    #[error("failed to run {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Pick the command from the file extension: `.py` runs under the configured
/// python, `.sh` under the configured shell, anything else is executed
/// directly.
fn build_command(path: &str, config: &Config) -> Command {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("py") => {
            let mut command = Command::new(&config.launcher.python);
            command.arg(path);
            command
        }
        Some("sh") => {
            let mut command = Command::new(&config.launcher.shell);
            command.arg(path);
            command
        }
        _ => Command::new(path),
    }
}

/// Launch a script fire-and-forget: detached child, null stdio, no wait, no
/// exit-status handling. The file must still exist at spawn time; entries
/// may predate their script, or the script may have been deleted since it
/// was registered.
pub fn launch(path: &str, config: &Config) -> Result<(), LaunchError> {
    if !Path::new(path).exists() {
        return Err(LaunchError::NotFound(path.to_string()));
    }

    let mut command = build_command(path, config);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command.spawn().map_err(|e| LaunchError::Spawn {
        path: path.to_string(),
        source: e,
    })?;

    info!("launched {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn python_scripts_run_under_python() {
        let config = Config::default();
        let command = build_command("/opt/jobs/backup.py", &config);
        assert_eq!(command.get_program(), OsStr::new("python3"));
        assert_eq!(args(&command), [OsStr::new("/opt/jobs/backup.py")]);
    }

    #[test]
    fn shell_scripts_run_under_shell() {
        let config = Config::default();
        let command = build_command("/opt/jobs/clean.sh", &config);
        assert_eq!(command.get_program(), OsStr::new("bash"));
        assert_eq!(args(&command), [OsStr::new("/opt/jobs/clean.sh")]);
    }

    #[test]
    fn other_files_run_directly() {
        let config = Config::default();
        let command = build_command("/opt/jobs/cleanup", &config);
        assert_eq!(command.get_program(), OsStr::new("/opt/jobs/cleanup"));
        assert!(args(&command).is_empty());
    }

    #[test]
    fn configured_interpreters_are_used() {
        let mut config = Config::default();
        config.launcher.python = "python3.12".to_string();
        config.launcher.shell = "zsh".to_string();

        let command = build_command("/opt/jobs/backup.py", &config);
        assert_eq!(command.get_program(), OsStr::new("python3.12"));
        let command = build_command("/opt/jobs/clean.sh", &config);
        assert_eq!(command.get_program(), OsStr::new("zsh"));
    }

    #[test]
    fn missing_script_is_refused() {
        let config = Config::default();
        let err = launch("/definitely/not/here.sh", &config).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound(_)));
    }

    #[test]
    fn unrunnable_script_reports_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("job.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        let mut config = Config::default();
        config.launcher.shell = "/definitely/not/an/interpreter".to_string();
        let err = launch(script.to_str().unwrap(), &config).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn existing_script_spawns_detached() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("noop.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        // `true` exits immediately, so nothing lingers after the test.
        let mut config = Config::default();
        config.launcher.shell = "true".to_string();
        launch(script.to_str().unwrap(), &config).unwrap();
    }
}
