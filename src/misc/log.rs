//! Miscellaneous items related to [logging](log).
//!
//! Calls to the log macros are made throughout the library, keyed to a target
//! for the relevant subsystem.
//! Formula mutations and history replay log at debug, search dynamics at info
//! or trace.
//!
//! The library itself provides no log implementation.
//! The binaries install a [log4rs] console appender when built with the `log`
//! feature, and otherwise records go nowhere --- see [log] for alternatives.

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const FORMULA: &str = "formula";
    pub const HISTORY: &str = "history";
    pub const PROPAGATION: &str = "propagation";
    pub const DECISION: &str = "decision";
    pub const BACKTRACK: &str = "backtrack";
    pub const VALUATION: &str = "valuation";
    pub const PARSER: &str = "parser";
    pub const CHECKER: &str = "checker";
    pub const SUDOKU: &str = "sudoku";
    pub const LISTENER: &str = "listener";
}

/// Installs a console appender routing every target to stderr.
///
/// Intended for the command line front ends, which pass the level filter from
/// their arguments.
#[cfg(feature = "log")]
pub fn enable(filter: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:5} {t} {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(filter));

    match config {
        Ok(config) => {
            let _ = log4rs::init_config(config);
        }
        Err(e) => eprintln!("c Logging setup failed: {e:?}"),
    }
}
