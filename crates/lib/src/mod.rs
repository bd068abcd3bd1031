pub mod action;
pub mod config;
pub mod constant;
pub mod error;
pub mod log;
pub mod rpc;
pub mod sanitize;
pub mod server;
pub mod validator;
pub use config::Config;
pub use error::DonateError;
