use std::thread;

use fltk::app::{self, Sender};
use fltk::prelude::*;

use crate::app::contact::{self, FieldErrors, SubmissionState};
use crate::app::content;
use crate::app::messages::Message;
use crate::app::router::store::NavigateOptions;
use crate::app::router::{NavigationStore, Route, resolve};
use crate::app::settings::AppSettings;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::Shell;
use crate::ui::theme::{apply_theme, palette};

/// Minimum-perceptible duration of the navigation loading overlay.
/// Navigation itself is synchronous; the overlay exists purely so page
/// changes read as intentional rather than flickery.
pub const LOADER_SECS: f64 = 0.4;

pub struct AppState {
    pub shell: Shell,
    pub nav: NavigationStore,
    pub settings: AppSettings,
    pub submission: SubmissionState,
    pub api_base: String,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        shell: Shell,
        nav: NavigationStore,
        settings: AppSettings,
        sender: Sender<Message>,
    ) -> Self {
        Self {
            shell,
            nav,
            settings,
            submission: SubmissionState::default(),
            api_base: content::api_base(),
            sender,
        }
    }

    /// Apply the persisted theme, mount the initial route, and show the
    /// window. Called once before the dispatch loop starts.
    pub fn mount(&mut self) {
        apply_theme(&mut self.shell, self.settings.theme.is_dark());
        let route = self.nav.current_route().clone();
        self.route_changed(&route);
        self.shell.window.show();
    }

    // --- Navigation ---

    pub fn navigate(&mut self, target: &str) {
        let outcome = self.nav.navigate(target, NavigateOptions::with_loader());
        if let Some(generation) = outcome.loader {
            self.shell.show_overlay();
            let sender = self.sender;
            app::add_timeout3(LOADER_SECS, move |_| {
                sender.send(Message::LoaderExpired(generation));
            });
        }
    }

    pub fn navigate_back(&mut self) {
        self.nav.pop_back();
    }

    pub fn navigate_forward(&mut self) {
        self.nav.pop_forward();
    }

    /// The store told us the route changed (explicit navigation or a
    /// history pop). Resolve the page, mount it, and refresh the chrome.
    pub fn route_changed(&mut self, route: &Route) {
        let page = resolve(route);
        let pal = palette(self.settings.theme.is_dark());

        self.shell.pages.show(page, &pal, self.sender);
        self.shell.set_active_nav(page, &pal);
        self.shell.close_drawer();
        self.shell
            .update_back_forward(self.nav.can_go_back(), self.nav.can_go_forward());
        self.shell
            .window
            .set_label(&format!("{} - {}", page.title(), content::BRAND_NAME));
        self.shell.window.redraw();
    }

    pub fn loader_expired(&mut self, generation: u64) {
        if self.nav.clear_loading(generation) {
            self.shell.hide_overlay();
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        self.settings.theme = self.settings.theme.flipped();
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }

        let is_dark = self.settings.theme.is_dark();
        apply_theme(&mut self.shell, is_dark);

        let pal = palette(is_dark);
        self.shell.pages.rebuild(&pal, self.sender);
        self.shell
            .set_active_nav(resolve(self.nav.current_route()), &pal);

        // A rebuild resets the submit control; re-disable it if a
        // request is still in flight.
        if self.submission == SubmissionState::Submitting {
            if let Some(widgets) = self.shell.pages.contact_widgets() {
                widgets.set_submitting(true);
            }
        }
        self.shell.window.redraw();
    }

    pub fn toggle_drawer(&mut self) {
        self.shell.toggle_drawer();
    }

    // --- Contact form ---

    pub fn submit_contact(&mut self) {
        if !self.submission.can_submit() {
            return;
        }
        let Some(widgets) = self.shell.pages.contact_widgets() else {
            return;
        };

        let message = widgets.message();
        let errors = contact::validate(&message);
        if !errors.is_empty() {
            widgets.show_errors(&errors);
            self.shell.window.redraw();
            return;
        }

        widgets.show_errors(&FieldErrors::default());
        widgets.clear_status();
        widgets.set_submitting(true);
        self.submission = SubmissionState::Submitting;

        let sender = self.sender;
        let api_base = self.api_base.clone();
        thread::spawn(move || {
            let result = contact::submit(&api_base, &message).map_err(|e| e.to_string());
            sender.send(Message::ContactFinished(result));
        });
        self.shell.window.redraw();
    }

    pub fn contact_finished(&mut self, result: Result<(), String>) {
        self.submission = SubmissionState::finish(result);

        if let Some(widgets) = self.shell.pages.contact_widgets() {
            widgets.set_submitting(false);
            match &self.submission {
                SubmissionState::Success => {
                    widgets.clear_fields();
                    widgets.set_status_success("Thanks! Your message is on its way.");
                }
                SubmissionState::Error(reason) => {
                    eprintln!("Contact submission failed: {}", reason);
                    widgets.set_status_error("Something went wrong. Please try again.");
                }
                _ => {}
            }
        }
        self.shell.window.redraw();
    }

    // --- External ---

    pub fn open_external(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }
}
