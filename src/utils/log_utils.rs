//! Verbosity-gated stdout reporting for the bucket tool.
//!
//! Every listing line, confirmation and diagnostic the tool emits goes
//! through a `Logger`. The `-v` flags only add information on top; they
//! never change what prints at the default level, so the fixed operation
//! messages are stable under any verbosity.

/// Levels a message can be emitted at, ordered by the verbosity required
/// to show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    /// Always shown: operation output
    Output = 0,
    /// One -v: operation summaries
    Info = 1,
    /// Two -v: request-level detail
    Debug = 2,
}

/// Writer for everything the tool reports on stdout
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    /// Build a logger from the counted `-v` flags
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn shows(&self, level: Level) -> bool {
        self.verbosity >= level as u8
    }

    fn emit(&self, msg: &str, level: Level) {
        if self.shows(level) {
            match level {
                Level::Output => println!("{msg}"),
                Level::Info => println!("info: {msg}"),
                Level::Debug => println!("dbg: {msg}"),
            }
        }
    }

    /// Print a line of operation output (always shown)
    pub fn normal(&self, msg: &str) {
        self.emit(msg, Level::Output);
    }

    /// Print an operation summary (shown at -v and above)
    pub fn info(&self, msg: &str) {
        self.emit(msg, Level::Info);
    }

    /// Print request-level detail (shown at -v -v)
    pub fn debug(&self, msg: &str) {
        self.emit(msg, Level::Debug);
    }
}
