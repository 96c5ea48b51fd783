//! Session Logging

pub mod logger;

pub use logger::SessionLogger;
