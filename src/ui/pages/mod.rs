//! Page views. Each page is a plain `Group` built on demand the first
//! time its route resolves; the host keeps built pages around and flips
//! visibility on navigation. A fallback frame covers the gap while a
//! view is being constructed.

pub mod about;
pub mod brands;
pub mod contact;
pub mod home;
pub mod legal;
pub mod media;

use std::collections::HashMap;

use fltk::{app::Sender, frame::Frame, group::Group, prelude::*};

use crate::app::messages::Message;
use crate::app::router::Page;
use crate::ui::theme::Palette;

pub use contact::{ContactDraft, ContactWidgets};

pub struct PageHost {
    host: Group,
    fallback: Frame,
    built: HashMap<Page, Group>,
    contact: Option<ContactWidgets>,
    current: Option<Page>,
}

impl PageHost {
    pub fn new(mut host: Group) -> Self {
        host.begin();
        let fallback = Self::make_fallback(&host);
        host.end();
        Self {
            host,
            fallback,
            built: HashMap::new(),
            contact: None,
            current: None,
        }
    }

    fn make_fallback(host: &Group) -> Frame {
        let mut fallback = Frame::new(host.x(), host.y(), host.w(), host.h(), None);
        fallback.set_label("Loading\u{2026}");
        fallback.set_label_size(18);
        fallback.hide();
        fallback
    }

    /// Mount `page`, building it first if this is its first visit.
    pub fn show(&mut self, page: Page, pal: &Palette, sender: Sender<Message>) {
        if self.current == Some(page) {
            return;
        }

        if let Some(previous) = self.current {
            if let Some(group) = self.built.get_mut(&previous) {
                group.hide();
            }
        }

        if let Some(group) = self.built.get_mut(&page) {
            group.show();
        } else {
            self.fallback.set_label_color(pal.muted);
            self.fallback.show();
            let group = self.build_page(page, pal, sender);
            self.fallback.hide();
            self.built.insert(page, group);
        }

        self.current = Some(page);
    }

    fn build_page(&mut self, page: Page, pal: &Palette, sender: Sender<Message>) -> Group {
        let (x, y, w, h) = (self.host.x(), self.host.y(), self.host.w(), self.host.h());
        self.host.begin();
        let group = match page {
            Page::Home => home::build(x, y, w, h, pal, sender),
            Page::About => about::build(x, y, w, h, pal),
            Page::Brands => brands::build(x, y, w, h, pal, sender),
            Page::Media => media::build(x, y, w, h, pal, sender),
            Page::Contact => {
                let (group, widgets) = contact::build(x, y, w, h, pal, sender);
                self.contact = Some(widgets);
                group
            }
            Page::Privacy => legal::build(x, y, w, h, pal, legal::PRIVACY_MD),
            Page::Terms => legal::build(x, y, w, h, pal, legal::TERMS_MD),
        };
        self.host.end();
        group
    }

    pub fn contact_widgets(&mut self) -> Option<&mut ContactWidgets> {
        self.contact.as_mut()
    }

    /// Throw away every built page and rebuild the current one with a
    /// fresh palette. In-progress contact input survives the rebuild.
    pub fn rebuild(&mut self, pal: &Palette, sender: Sender<Message>) {
        let draft = self.contact.as_ref().map(ContactWidgets::snapshot);
        let current = self.current;

        self.host.clear();
        self.built.clear();
        self.contact = None;
        self.current = None;

        self.host.begin();
        self.fallback = Self::make_fallback(&self.host);
        self.host.end();

        if let Some(page) = current {
            self.show(page, pal, sender);
        }
        if let (Some(draft), Some(widgets)) = (draft, self.contact.as_mut()) {
            widgets.restore(&draft);
        }
        self.host.redraw();
    }
}
