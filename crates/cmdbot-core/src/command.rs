use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// One user-invocable command.
///
/// All fields stay optional so a loaded spec re-serializes to exactly the
/// fields that were present in the config file. A missing `execute` is a
/// configuration error surfaced at dispatch time, not a parse failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandSpec {
    /// Argv vector: program followed by its arguments. With `shell`, the
    /// first element is the shell script and the rest become its positional
    /// parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute: Option<Vec<String>>,

    /// Reply text sent on a successful launch. Defaults to empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Run through the platform shell instead of exec'ing argv directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<bool>,
}

/// Read-only mapping from command name to spec. Keys match exactly,
/// case-sensitive.
pub type CommandTable = HashMap<String, CommandSpec>;

/// Outcome of a dispatch attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Process creation succeeded; carries the configured response text
    /// (empty when unconfigured).
    Success(String),
    /// No command with that name in the table.
    NotFound,
    /// The spec has no usable `execute` vector.
    MalformedSpec,
    /// Process creation failed; carries a human-readable description.
    LaunchFailed(String),
}

/// Command runner.
///
/// Owns the command table for the life of the process. Dispatch never blocks
/// on the spawned process: the child is dropped right after creation and the
/// runtime reaps it in the background. There is no concurrency cap and no
/// retry; a launch failure is surfaced once.
#[derive(Clone, Debug)]
pub struct Commander {
    commands: CommandTable,
}

impl Commander {
    pub fn new(commands: CommandTable) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Resolve `name` and launch its command without waiting for it.
    ///
    /// Returns as soon as process creation succeeds or fails. Must run inside
    /// a Tokio runtime (the child is handed to the runtime's reaper).
    pub fn dispatch(&self, name: &str) -> Dispatch {
        let Some(spec) = self.commands.get(name) else {
            return Dispatch::NotFound;
        };

        let Some(execute) = spec.execute.as_deref().filter(|argv| !argv.is_empty()) else {
            tracing::error!(command = name, "loaded command is missing a non-empty 'execute' field");
            return Dispatch::MalformedSpec;
        };

        match launch_detached(execute, spec.shell.unwrap_or(false)) {
            Ok(()) => Dispatch::Success(spec.response.clone().unwrap_or_default()),
            Err(err) => Dispatch::LaunchFailed(format!(
                "failed to execute command '{name}': {err}"
            )),
        }
    }
}

/// Spawn argv as a detached child: no wait-handle, no exit-code collection.
fn launch_detached(argv: &[String], shell: bool) -> std::io::Result<()> {
    let mut cmd = if shell {
        let mut cmd = Command::new(platform_shell());
        cmd.arg("-c").args(argv);
        cmd
    } else {
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        cmd
    };

    let _child = cmd.spawn()?;
    Ok(())
}

fn platform_shell() -> &'static str {
    if cfg!(windows) {
        "cmd"
    } else {
        "sh"
    }
}
