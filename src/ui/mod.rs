//! FLTK shell: window construction, theming, page views, dialogs.

pub mod dialogs;
pub mod main_window;
pub mod pages;
pub mod theme;
