//! Listeners shipped with the library.

mod chrono;
mod logging;
mod statistics;

pub use chrono::ChronoListener;
pub use logging::LoggingListener;
pub use statistics::StatisticsListener;
