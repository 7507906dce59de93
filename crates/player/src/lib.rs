//! TTRPGZ Player crate.
//!
//! Session handling, data access, routing and presentation for the character
//! sheet client. The `ttrpgz` binary in `main.rs` is a thin shell over
//! [`runner`].

pub mod application;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use config::{PlayerConfig, StorageScope};
pub use runner::{execute, AppContext};
