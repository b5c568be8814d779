//! Cron jobs running alongside the HTTP server.

pub mod status_report;
