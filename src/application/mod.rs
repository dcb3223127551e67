//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod create_session;
pub mod export_session;
pub mod list;
pub mod manage_config;

pub use add_entry::add_entry;
pub use create_session::create_session;
pub use export_session::export_session;
pub use list::{list_entries, list_sessions};
pub use manage_config::ConfigService;
