use fltk::app;

use angel_kellogg::app::messages::Message;
use angel_kellogg::app::router::NavigationStore;
use angel_kellogg::app::settings::AppSettings;
use angel_kellogg::app::state::AppState;
use angel_kellogg::ui::main_window::build_shell;

fn main() {
    let fl = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();

    let mut nav = NavigationStore::new("/");
    nav.subscribe(move |route| sender.send(Message::RouteChanged(route.clone())));

    let shell = build_shell(sender);
    let mut state = AppState::new(shell, nav, settings, sender);
    state.mount();

    while fl.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::Navigate(target) => state.navigate(&target),
                Message::NavigateBack => state.navigate_back(),
                Message::NavigateForward => state.navigate_forward(),
                Message::RouteChanged(route) => state.route_changed(&route),
                Message::LoaderExpired(generation) => state.loader_expired(generation),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ToggleNavDrawer => state.toggle_drawer(),
                Message::SubmitContact => state.submit_contact(),
                Message::ContactFinished(result) => state.contact_finished(result),
                Message::OpenExternal(url) => state.open_external(&url),
                Message::ShowAbout => state.show_about(),
                Message::Quit => app::quit(),
            }
        }
    }
}
