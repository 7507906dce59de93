pub mod http;
pub mod platform;
