use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};

use crate::app::content;
use crate::app::messages::Message;
use crate::app::router::Page;
use crate::ui::pages::PageHost;
use crate::ui::theme::Palette;

pub const WINDOW_W: i32 = 960;
pub const WINDOW_H: i32 = 640;
pub const HEADER_H: i32 = 56;
pub const FOOTER_H: i32 = 60;
pub const CONTENT_Y: i32 = HEADER_H;
pub const CONTENT_H: i32 = WINDOW_H - HEADER_H - FOOTER_H;

/// A nav control bound to the page it navigates to, so the active link
/// can be highlighted after each route change.
pub struct NavLink {
    pub page: Page,
    pub button: Button,
}

/// Persistent chrome plus the page host. Everything in here survives
/// navigation; only the content inside `pages` changes per route.
pub struct Shell {
    pub window: Window,
    pub header_bg: Frame,
    pub brand_button: Button,
    pub back_button: Button,
    pub forward_button: Button,
    pub drawer_toggle: Button,
    pub theme_toggle: Button,
    pub nav_links: Vec<NavLink>,
    pub pages: PageHost,
    pub drawer: Group,
    pub drawer_links: Vec<NavLink>,
    pub footer_bg: Frame,
    pub copyright: Frame,
    pub social_buttons: Vec<Button>,
    pub privacy_button: Button,
    pub terms_button: Button,
    pub app_info_button: Button,
    pub overlay: Frame,
}

fn flat_button(x: i32, y: i32, w: i32, h: i32, label: &str) -> Button {
    let mut button = Button::new(x, y, w, h, None);
    button.set_label(label);
    button.set_frame(FrameType::FlatBox);
    button.clear_visible_focus();
    button
}

pub fn build_shell(sender: Sender<Message>) -> Shell {
    let mut window = Window::new(100, 100, WINDOW_W, WINDOW_H, "Angel Kellogg");
    window.set_xclass("AngelKellogg");

    // Header
    let mut header_bg = Frame::new(0, 0, WINDOW_W, HEADER_H, None);
    header_bg.set_frame(FrameType::FlatBox);

    let mut brand_button = flat_button(16, 12, 200, 32, content::BRAND_NAME);
    brand_button.set_label_size(18);
    brand_button.set_callback(move |_| sender.send(Message::Navigate("/".to_string())));

    let mut back_button = flat_button(228, 14, 28, 28, "@<-");
    back_button.set_callback(move |_| sender.send(Message::NavigateBack));

    let mut forward_button = flat_button(260, 14, 28, 28, "@->");
    forward_button.set_callback(move |_| sender.send(Message::NavigateForward));

    let mut drawer_toggle = flat_button(444, 14, 36, 28, "\u{2630}");
    drawer_toggle.set_callback(move |_| sender.send(Message::ToggleNavDrawer));

    let mut nav_links = Vec::new();
    for (i, page) in Page::nav_order().iter().enumerate() {
        let x = 494 + i as i32 * 84;
        let mut button = flat_button(x, 14, 78, 28, page.title());
        let route = page.route();
        button.set_callback(move |_| sender.send(Message::Navigate(route.to_string())));
        nav_links.push(NavLink {
            page: *page,
            button,
        });
    }

    let mut theme_toggle = flat_button(916, 14, 28, 28, "\u{2600}");
    theme_toggle.set_callback(move |_| sender.send(Message::ToggleDarkMode));

    // Content host; pages are built lazily inside it
    let mut content_host = Group::new(0, CONTENT_Y, WINDOW_W, CONTENT_H, None);
    content_host.end();
    let pages = PageHost::new(content_host);

    // Footer
    let mut footer_bg = Frame::new(0, WINDOW_H - FOOTER_H, WINDOW_W, FOOTER_H, None);
    footer_bg.set_frame(FrameType::FlatBox);

    let mut social_buttons = Vec::new();
    for (i, link) in content::SOCIAL_LINKS.iter().enumerate() {
        let x = 662 + i as i32 * 96;
        let mut button = flat_button(x, WINDOW_H - FOOTER_H + 4, 90, 22, link.label);
        button.set_label_size(12);
        let url = link.url;
        button.set_callback(move |_| sender.send(Message::OpenExternal(url.to_string())));
        social_buttons.push(button);
    }

    let mut privacy_button = flat_button(16, WINDOW_H - 30, 70, 24, "Privacy");
    privacy_button.set_label_size(11);
    privacy_button.set_callback(move |_| sender.send(Message::Navigate("/privacy".to_string())));

    let mut terms_button = flat_button(90, WINDOW_H - 30, 60, 24, "Terms");
    terms_button.set_label_size(11);
    terms_button.set_callback(move |_| sender.send(Message::Navigate("/terms".to_string())));

    let mut app_info_button = flat_button(154, WINDOW_H - 30, 90, 24, "App Info");
    app_info_button.set_label_size(11);
    app_info_button.set_callback(move |_| sender.send(Message::ShowAbout));

    let mut copyright = Frame::new(320, WINDOW_H - 30, WINDOW_W - 336, 24, None);
    copyright.set_label(content::COPYRIGHT);
    copyright.set_label_size(11);
    copyright.set_align(Align::Inside | Align::Right);

    // Compact nav drawer; sits above the content, hidden until toggled
    let mut drawer = Group::new(0, HEADER_H, 220, 7 * 40 + 16, None);
    drawer.set_frame(FrameType::FlatBox);
    let all_pages = [
        Page::Home,
        Page::About,
        Page::Brands,
        Page::Media,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
    ];
    let mut drawer_links = Vec::new();
    for (i, page) in all_pages.iter().enumerate() {
        let mut button = flat_button(8, HEADER_H + 8 + i as i32 * 40, 204, 32, page.title());
        button.set_align(Align::Inside | Align::Left);
        let route = page.route();
        button.set_callback(move |_| sender.send(Message::Navigate(route.to_string())));
        drawer_links.push(NavLink {
            page: *page,
            button,
        });
    }
    drawer.end();
    drawer.hide();

    // Full-window loading overlay, topmost
    let mut overlay = Frame::new(0, 0, WINDOW_W, WINDOW_H, None);
    overlay.set_frame(FrameType::FlatBox);
    overlay.set_label("Loading\u{2026}");
    overlay.set_label_size(22);
    overlay.hide();

    window.end();
    window.set_callback(move |_| sender.send(Message::Quit));

    Shell {
        window,
        header_bg,
        brand_button,
        back_button,
        forward_button,
        drawer_toggle,
        theme_toggle,
        nav_links,
        pages,
        drawer,
        drawer_links,
        footer_bg,
        copyright,
        social_buttons,
        privacy_button,
        terms_button,
        app_info_button,
        overlay,
    }
}

impl Shell {
    /// Highlight the nav link for the active page; reset the others.
    pub fn set_active_nav(&mut self, page: Page, pal: &Palette) {
        for link in self.nav_links.iter_mut().chain(self.drawer_links.iter_mut()) {
            if link.page == page {
                link.button.set_label_color(pal.accent);
            } else {
                link.button.set_label_color(pal.text);
            }
        }
    }

    pub fn update_back_forward(&mut self, can_go_back: bool, can_go_forward: bool) {
        if can_go_back {
            self.back_button.activate();
        } else {
            self.back_button.deactivate();
        }
        if can_go_forward {
            self.forward_button.activate();
        } else {
            self.forward_button.deactivate();
        }
    }

    pub fn show_overlay(&mut self) {
        self.overlay.show();
        self.window.redraw();
    }

    pub fn hide_overlay(&mut self) {
        self.overlay.hide();
        self.window.redraw();
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer.visible() {
            self.drawer.hide();
        } else {
            self.drawer.show();
        }
        self.window.redraw();
    }

    pub fn close_drawer(&mut self) {
        self.drawer.hide();
    }
}
