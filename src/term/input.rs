use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const POLL: Duration = Duration::from_millis(50);

/// Whitespace separated integers from a line oriented reader.
///
/// A token that is not an integer, or running out of input, reads as 0.
pub struct Numbers<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Numbers<R> {
    pub fn new(reader: R) -> Numbers<R> {
        Numbers {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_number(&mut self) -> std::io::Result<i64> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(match token.parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => {
                        warn!(%token, "input is not an integer, reading 0");
                        0
                    }
                });
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                warn!("end of input, reading 0");
                return Ok(0);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }
}

/// Reads numbers on a background thread so a blocked read can be
/// abandoned when Ctrl-C arrives.
///
/// One number is read per request. A request left unanswered by an
/// interrupt stays outstanding and is answered by the next `wait`.
pub struct InputThread {
    requests: SyncSender<()>,
    values: Receiver<io::Result<i64>>,
    outstanding: bool,
}

impl InputThread {
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> InputThread {
        let (requests, request_rx) = sync_channel::<()>(1);
        let (value_tx, values) = sync_channel(1);
        thread::spawn(move || {
            let mut numbers = Numbers::new(reader);
            for () in request_rx {
                if value_tx.send(numbers.next_number()).is_err() {
                    break;
                }
            }
            debug!("input thread finished");
        });
        InputThread {
            requests,
            values,
            outstanding: false,
        }
    }

    /// The next number, or `None` once `interrupted` is set while waiting.
    pub fn wait(&mut self, interrupted: &AtomicBool) -> io::Result<Option<i64>> {
        if !self.outstanding {
            self.requests.send(()).map_err(|_| closed())?;
            self.outstanding = true;
        }
        loop {
            match self.values.recv_timeout(POLL) {
                Ok(value) => {
                    self.outstanding = false;
                    return value.map(Some);
                }
                Err(RecvTimeoutError::Timeout) => {
                    if interrupted.load(Ordering::SeqCst) {
                        debug!("input wait interrupted");
                        return Ok(None);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return Err(closed()),
            }
        }
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "input thread stopped")
}
