/// Adapters module - native implementations of the vault's ports.

pub mod global_logger;
pub mod native;

pub use global_logger::logger;
pub use native::ConsoleLogger;
