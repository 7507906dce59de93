//! Application layer - Use cases and orchestration

pub mod error;
pub mod services;
pub mod session;

pub use error::SessionError;
