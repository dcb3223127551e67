//! labbook - Laboratory notebook application
//!
//! Records lab sessions and their entries (free-text observations with an
//! attached file) in a local SQLite store, and exports a session with
//! attachment previews to a paginated PDF document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LabbookError;
