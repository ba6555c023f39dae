//! Client-side navigation: path canonicalization, the navigation store
//! with its in-process history, and route-to-page resolution. Everything
//! in here is UI-free so it can be tested headless.

pub mod history;
pub mod path;
pub mod resolver;
pub mod store;

pub use path::{Route, normalize};
pub use resolver::{Page, resolve};
pub use store::{NavigateOptions, NavigationOutcome, NavigationStore};
