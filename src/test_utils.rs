//! Shared test utilities for session and command tests.
//!
//! - `ScriptedSession`: a `RawSession` that replays queued responses
//! - `capture_logs`: run a closure under a subscriber that records output

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::session::{RawOutcome, RawSession, TransportError};

/// A session double that answers statements from a queue.
///
/// Once the queue is empty every statement succeeds without a result set.
pub struct ScriptedSession {
    responses: RefCell<VecDeque<Result<RawOutcome, TransportError>>>,
    executed: RefCell<Vec<String>>,
    releases: Cell<u32>,
    alive: Cell<bool>,
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            executed: RefCell::new(Vec::new()),
            releases: Cell::new(0),
            alive: Cell::new(true),
        }
    }

    /// Queue an outcome for the next statement.
    pub fn respond(self, outcome: RawOutcome) -> Self {
        self.responses.borrow_mut().push_back(Ok(outcome));
        self
    }

    /// Queue a transport failure for the next statement.
    pub fn fail(self, err: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    /// Statements received so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub fn release_count(&self) -> u32 {
        self.releases.get()
    }

    pub fn set_alive(&self, alive: bool) {
        self.alive.set(alive);
    }
}

impl RawSession for ScriptedSession {
    fn raw_execute(&self, statement: &str) -> Result<RawOutcome, TransportError> {
        self.executed.borrow_mut().push(statement.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RawOutcome::succeeded()))
    }

    fn release(&self) {
        self.releases.set(self.releases.get() + 1);
    }

    fn ping(&self) -> bool {
        self.alive.get()
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Lines emitted at `level` ("ERROR", "DEBUG", ...).
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.trim_start().starts_with(level))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber that records every event at
/// DEBUG and above, returning the result and the captured output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogBuffer) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer)
}
