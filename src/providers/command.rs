use std::process::{Command, Stdio};

use super::{RESULT_PREFIX, TERMINAL_PREFIX};
use crate::error::LaunchError;
use crate::systems::launch::Launcher;

/// Opens paths by handing them to an external command.
///
/// `opener` is run to completion and its exit status decides success, which
/// suits `xdg-open` style helpers. `terminal` is only spawned: the command it
/// runs lives as long as the user keeps it open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLauncher {
    opener: Vec<String>,
    terminal: Vec<String>,
}

impl CommandLauncher {
    #[must_use]
    pub fn new(opener: Vec<String>, terminal: Vec<String>) -> Self {
        Self { opener, terminal }
    }

    #[must_use]
    pub fn opener(&self) -> &[String] {
        &self.opener
    }

    #[must_use]
    pub fn terminal(&self) -> &[String] {
        &self.terminal
    }

    fn open(&self, path: &str) -> Result<(), LaunchError> {
        let mut command = build(&self.opener, path)?;
        let program = self.opener[0].clone();
        let status = command
            .status()
            .map_err(|err| LaunchError::spawn(&program, &err))?;
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Exited {
                program,
                status: status.to_string(),
            })
        }
    }

    fn run_in_terminal(&self, command_line: &str) -> Result<(), LaunchError> {
        let mut command = build(&self.terminal, command_line)?;
        command
            .spawn()
            .map(drop)
            .map_err(|err| LaunchError::spawn(&self.terminal[0], &err))
    }
}

impl Default for CommandLauncher {
    fn default() -> Self {
        Self::new(default_opener(), default_terminal())
    }
}

impl Launcher for CommandLauncher {
    fn launch(&self, path: &str) -> Result<(), LaunchError> {
        if path.is_empty() {
            return Err(LaunchError::EmptyPath);
        }
        if path.starts_with(RESULT_PREFIX) {
            return Ok(());
        }
        if let Some(command_line) = path.strip_prefix(TERMINAL_PREFIX) {
            return self.run_in_terminal(command_line);
        }
        self.open(path)
    }
}

fn build(argv: &[String], last: &str) -> Result<Command, LaunchError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(LaunchError::Unsupported(last.to_string()));
    };
    let mut command = Command::new(program);
    command
        .args(args)
        .arg(last)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(command)
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

/// Platform helper used to open files, folders and URLs.
#[must_use]
pub fn default_opener() -> Vec<String> {
    if cfg!(target_os = "windows") {
        argv(&["cmd", "/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        argv(&["open"])
    } else {
        argv(&["xdg-open"])
    }
}

/// Platform command used to run `terminal:` entries.
#[must_use]
pub fn default_terminal() -> Vec<String> {
    if cfg!(target_os = "windows") {
        argv(&["cmd", "/C", "start", "powershell", "-NoExit", "-Command"])
    } else if cfg!(target_os = "linux") {
        argv(&["x-terminal-emulator", "-e"])
    } else {
        argv(&["sh", "-c"])
    }
}
