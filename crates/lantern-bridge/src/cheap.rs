//! Bridge for plain stdin/stdout ("dumb terminal") interpreters.
//!
//! The interpreter protocol has no framing. A turn is over when the
//! interpreter prints its prompt, which shows up as a newline followed by
//! `>` at the end of the stream. The status and graphics windows are never
//! drawn by such interpreters, and only line input can be delivered.

use std::io::{Read, Write};
use std::time::{Duration, Instant};

use crate::command::{Command, InputKind};
use crate::error::{BridgeError, BridgeResult};
use crate::pump::{OutputPump, Poll};
use crate::state::{GameState, SessionState, Windows};

/// Two-byte suffix that marks the end of a turn.
pub const PROMPT_MARKER: &[u8; 2] = b"\n>";

/// A stdin/stdout interpreter connection.
pub struct CheapGameState<W: Write> {
    input: Option<W>,
    output: Option<OutputPump>,
    /// Bytes that arrived after the last prompt; they open the next turn.
    carry: Vec<u8>,
    timeout: Duration,
    verbose: bool,
    echo: Box<dyn Write + Send>,
    windows: Windows,
    state: SessionState,
}

impl<W: Write> CheapGameState<W> {
    /// Wrap an interpreter's input sink and output source.
    ///
    /// `timeout` bounds both each wait for new bytes and the whole turn.
    /// With `verbose` set, every received line is echoed to stdout.
    pub fn new<R>(input: W, output: R, timeout: Duration, verbose: bool) -> BridgeResult<Self>
    where
        R: Read + Send + 'static,
    {
        Ok(Self {
            input: Some(input),
            output: Some(OutputPump::spawn(output)?),
            carry: Vec::new(),
            timeout,
            verbose,
            echo: Box::new(std::io::stdout()),
            windows: Windows::default(),
            state: SessionState::Uninitialized,
        })
    }

    /// Send verbose echo to `sink` instead of stdout.
    pub fn with_echo(mut self, sink: impl Write + Send + 'static) -> Self {
        self.echo = Box::new(sink);
        self
    }

    /// The turn timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether received lines are echoed.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Release both streams.
    ///
    /// Dropping the input sink closes the interpreter's stdin; dropping the
    /// pump detaches the reader thread, which exits at the next EOF. Closing
    /// twice is a no-op.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        let flushed = self.input.take().map_or(Ok(()), |mut input| input.flush());
        if let Err(e) = flushed {
            tracing::warn!(error = %e, "flushing interpreter input on close failed");
        }
        self.output = None;
        self.carry.clear();
        self.state = SessionState::Closed;
        tracing::debug!("bridge closed");
    }

    fn ensure_ready(&self) -> BridgeResult<()> {
        match self.state {
            SessionState::Ready => Ok(()),
            SessionState::Uninitialized => Err(BridgeError::NotReady),
            SessionState::Closed => Err(BridgeError::Closed),
        }
    }

    fn echo_lines(&mut self, lines: &[String]) -> std::io::Result<()> {
        for line in lines.iter().filter(|l| l.as_str() != ">") {
            writeln!(self.echo, "{line}")?;
        }
        self.echo.flush()
    }
}

impl<W: Write> GameState for CheapGameState<W> {
    fn initialize(&mut self) -> BridgeResult<()> {
        match self.state {
            SessionState::Closed => Err(BridgeError::Closed),
            _ => {
                self.state = SessionState::Ready;
                Ok(())
            }
        }
    }

    fn send_input(&mut self, cmd: &Command) -> BridgeResult<()> {
        if cmd.kind() != InputKind::Line {
            return Err(BridgeError::UnsupportedInputKind(cmd.kind()));
        }
        self.ensure_ready()?;
        let input = self.input.as_mut().ok_or(BridgeError::Closed)?;

        let mut line = String::with_capacity(cmd.payload().len() + 1);
        line.push_str(cmd.payload());
        line.push('\n');
        input.write_all(line.as_bytes())?;
        input.flush()?;

        tracing::debug!(command = cmd.payload(), "sent line");
        Ok(())
    }

    fn receive_output(&mut self) -> BridgeResult<String> {
        self.ensure_ready()?;
        let timeout = self.timeout;
        let pump = self.output.as_mut().ok_or(BridgeError::Closed)?;

        self.windows.story.clear();
        let deadline = Instant::now() + timeout;
        let mut pending = std::mem::take(&mut self.carry);
        let mut output = Vec::new();
        let mut prompted = false;

        loop {
            if pending.is_empty() {
                match pump.poll(timeout) {
                    Poll::Data(chunk) => pending = chunk,
                    Poll::Eof | Poll::Idle => break,
                }
            }

            let mut consumed = pending.len();
            for (i, &byte) in pending.iter().enumerate() {
                if byte == PROMPT_MARKER[1] && output.last() == Some(&PROMPT_MARKER[0]) {
                    prompted = true;
                    consumed = i + 1;
                    break;
                }
                output.push(byte);
            }
            pending.drain(..consumed);

            if prompted {
                break;
            }
        }
        self.carry = pending;

        // A steady trickle never idles a single wait; the deadline bounds the turn.
        if !prompted && Instant::now() >= deadline {
            tracing::warn!(
                ?timeout,
                received = output.len(),
                "interpreter did not prompt before the deadline"
            );
            return Err(BridgeError::OutputTimeout {
                timeout,
                received: output.len(),
            });
        }

        let text = String::from_utf8(output)?;
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        // The turn is already consumed; a broken echo sink must not lose it.
        let echoed = if self.verbose {
            self.echo_lines(&lines)
        } else {
            Ok(())
        };
        if let Err(e) = echoed {
            tracing::warn!(error = %e, "verbose echo failed");
        }
        tracing::debug!(lines = lines.len(), prompted, "received output");
        self.windows.story = lines;

        Ok(text.trim().to_string())
    }

    fn windows(&self) -> &Windows {
        &self.windows
    }

    fn state(&self) -> SessionState {
        self.state
    }
}
