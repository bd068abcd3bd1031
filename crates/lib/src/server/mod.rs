pub mod args;
pub mod cors;
pub mod handler;
pub mod server;

// Re-export main types for CLI usage
pub use args::ServerArgs;
pub use handler::DonateAction;
pub use server::{build_router, run_server, ServerHandle};
