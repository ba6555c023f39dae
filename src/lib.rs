//! Desktop companion app for the Angel Kellogg brand: a small set of
//! pages behind a client-side router, a persisted dark/light theme, and
//! a contact form POSTed to the site API.

pub mod app;
pub mod ui;
