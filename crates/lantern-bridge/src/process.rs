//! Interpreter process management.

use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command as ProcessCommand, ExitStatus, Stdio};
use std::time::Duration;

use crate::cheap::CheapGameState;
use crate::command::Command;
use crate::error::{BridgeError, BridgeResult};
use crate::state::{GameState, SessionState, Windows};

/// Default turn timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// How to launch an interpreter.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Interpreter executable.
    pub interpreter: PathBuf,
    /// Game file passed as the last argument.
    pub game: PathBuf,
    /// Extra arguments placed before the game file.
    pub args: Vec<String>,
    /// Turn timeout.
    pub timeout: Duration,
    /// Echo received lines to stdout.
    pub verbose: bool,
}

impl ProcessConfig {
    /// Create a configuration for `interpreter <game>`.
    pub fn new(interpreter: impl Into<PathBuf>, game: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            game: game.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }

    /// Add an interpreter argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the turn timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable echo of received lines.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A running interpreter together with its stdin/stdout bridge.
///
/// The session owns the child. [`close`](Self::close) and `Drop` both close
/// stdin, release the output reader, kill the child and reap it.
pub struct ProcessSession {
    bridge: CheapGameState<ChildStdin>,
    child: Child,
    exit_status: Option<ExitStatus>,
    config: ProcessConfig,
}

impl ProcessSession {
    /// Spawn the interpreter and connect a bridge to its pipes.
    ///
    /// The bridge is not initialized yet. Spawn failures are returned as is;
    /// nothing is retried.
    pub fn spawn(config: ProcessConfig) -> BridgeResult<Self> {
        let program = config.interpreter.display().to_string();
        let mut child = ProcessCommand::new(&config.interpreter)
            .args(&config.args)
            .arg(&config.game)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                program: program.clone(),
                source,
            })?;

        let streams = child
            .stdin
            .take()
            .ok_or(BridgeError::MissingPipe("stdin"))
            .and_then(|stdin| {
                child
                    .stdout
                    .take()
                    .map(|stdout| (stdin, stdout))
                    .ok_or(BridgeError::MissingPipe("stdout"))
            });
        let (stdin, stdout) = match streams {
            Ok(streams) => streams,
            Err(e) => {
                reap(&mut child);
                return Err(e);
            }
        };

        let bridge = match CheapGameState::new(stdin, stdout, config.timeout, config.verbose) {
            Ok(bridge) => bridge,
            Err(e) => {
                reap(&mut child);
                return Err(e);
            }
        };

        tracing::info!(
            interpreter = %program,
            game = %config.game.display(),
            pid = child.id(),
            "interpreter started"
        );

        Ok(Self {
            bridge,
            child,
            exit_status: None,
            config,
        })
    }

    /// The launch configuration.
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// OS process id of the interpreter.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Whether the interpreter process is still alive.
    pub fn is_running(&mut self) -> bool {
        if self.exit_status.is_some() {
            return false;
        }
        match self.child.try_wait() {
            Ok(Some(status)) => {
                self.exit_status = Some(status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(error = %e, "could not query interpreter status");
                false
            }
        }
    }

    /// Exit status, once the process has been reaped.
    pub fn exit_status(&self) -> Option<ExitStatus> {
        self.exit_status
    }

    /// Close both streams, kill the interpreter and reap it.
    ///
    /// Every step runs even if an earlier one fails; the first failure is
    /// returned. Closing twice is a no-op.
    pub fn close(&mut self) -> BridgeResult<()> {
        if self.bridge.state() == SessionState::Closed && self.exit_status.is_some() {
            return Ok(());
        }
        self.bridge.close();

        let killed = match self.child.kill() {
            // Already exited on its own.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => Ok(()),
            other => other,
        };
        let waited = self.child.wait();

        if let Ok(status) = &waited {
            self.exit_status = Some(*status);
            tracing::info!(pid = self.child.id(), %status, "interpreter stopped");
        }
        killed?;
        waited?;
        Ok(())
    }
}

impl GameState for ProcessSession {
    fn initialize(&mut self) -> BridgeResult<()> {
        self.bridge.initialize()
    }

    fn send_input(&mut self, cmd: &Command) -> BridgeResult<()> {
        self.bridge.send_input(cmd)
    }

    fn receive_output(&mut self) -> BridgeResult<String> {
        self.bridge.receive_output()
    }

    fn windows(&self) -> &Windows {
        self.bridge.windows()
    }

    fn state(&self) -> SessionState {
        self.bridge.state()
    }
}

impl Drop for ProcessSession {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "interpreter teardown failed");
        }
    }
}

fn reap(child: &mut Child) {
    if let Err(e) = child.kill().and_then(|()| child.wait().map(drop)) {
        tracing::warn!(error = %e, "could not reap interpreter after failed setup");
    }
}
