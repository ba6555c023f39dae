use crate::app::router::Route;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them. The cloned `Sender` is also the imperative
/// navigate-from-anywhere handle: any code holding one can request a
/// navigation without touching the store directly.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(String),
    NavigateBack,
    NavigateForward,
    RouteChanged(Route),
    LoaderExpired(u64),

    // View
    ToggleDarkMode,
    ToggleNavDrawer,

    // Contact form
    SubmitContact,
    ContactFinished(Result<(), String>),

    // External & misc
    OpenExternal(String),
    ShowAbout,
    Quit,
}
