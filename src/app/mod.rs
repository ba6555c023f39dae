//! Application layer.
//!
//! # Structure
//!
//! - `router/` - Navigation core: path canonicalization, history, store, resolver
//! - `settings.rs` - Persisted theme flag
//! - `contact.rs` - Contact form model, validation, submission
//! - `content.rs` - Brand copy and runtime overrides
//! - `state.rs` - Main application coordinator
//! - `messages.rs` / `error.rs` - Channel messages and the error taxonomy

pub mod contact;
pub mod content;
pub mod error;
pub mod messages;
pub mod router;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use router::{NavigateOptions, NavigationStore, Page, Route};
pub use settings::{AppSettings, ThemeMode};
