//! Background reader for the interpreter's output stream.
//!
//! Blocking pipes cannot be read with a timeout portably, so a helper thread
//! performs the blocking reads and forwards every chunk over a channel. The
//! session then waits on the channel with `recv_timeout`.

use std::io::{ErrorKind, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const CHUNK_SIZE: usize = 4096;

/// Outcome of one bounded wait on the output stream.
#[derive(Debug)]
pub enum Poll {
    /// Bytes became available.
    Data(Vec<u8>),
    /// The stream reached end of file or failed.
    Eof,
    /// Nothing arrived within the wait.
    Idle,
}

/// Receiving end of a reader thread.
pub struct OutputPump {
    rx: Receiver<Vec<u8>>,
    finished: bool,
}

impl OutputPump {
    /// Start pumping `source` on a background thread.
    ///
    /// The thread exits when the source reaches EOF, returns an error, or
    /// the pump is dropped and the next chunk cannot be delivered.
    pub fn spawn<R>(mut source: R) -> std::io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("lantern-output".to_string())
            .spawn(move || {
                let mut buf = [0u8; CHUNK_SIZE];
                loop {
                    match source.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            if tx.send(buf[..n].to_vec()).is_err() {
                                break;
                            }
                        }
                        Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                        Err(e) => {
                            tracing::warn!(error = %e, "interpreter output read failed");
                            break;
                        }
                    }
                }
                tracing::debug!("output pump finished");
            })?;

        Ok(Self {
            rx,
            finished: false,
        })
    }

    /// Wait up to `timeout` for the next chunk.
    pub fn poll(&mut self, timeout: Duration) -> Poll {
        if self.finished {
            return Poll::Eof;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(chunk) => Poll::Data(chunk),
            Err(RecvTimeoutError::Timeout) => Poll::Idle,
            Err(RecvTimeoutError::Disconnected) => {
                self.finished = true;
                Poll::Eof
            }
        }
    }

    /// Whether the source has reached end of file.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
