//! Core library modules for punch.
//!
//! - **Infrastructure**: configuration, data directory, messaging, input parsing
//! - **Domain logic**: scan decisions, report aggregation, admin sessions
//! - **Output**: table rendering and CSV export

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod input;
pub mod messages;
pub mod password;
pub mod report;
pub mod session;
pub mod view;
