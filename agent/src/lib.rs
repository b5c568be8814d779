//! Client side of the management portal.
//!
//! The agent runs at a customer installation. It finds the script directory holding
//! the license key file, reports the newest log entry as a heartbeat and exchanges
//! the license key once the portal has a started replacement for it.

pub mod client;
pub mod config;
pub mod error;
pub mod license;
pub mod log;
pub mod logger;
pub mod lookup;
pub mod runner;
