//! Global logger instance shared by every `Platform`.

use crate::adapters::native::ConsoleLogger;
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
