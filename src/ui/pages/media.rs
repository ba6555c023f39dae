use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::{LISTEN_LINKS, PODCAST_BLURB, PODCAST_NAME};
use crate::app::messages::Message;
use crate::ui::theme::Palette;

pub fn build(x: i32, y: i32, w: i32, h: i32, pal: &Palette, sender: Sender<Message>) -> Group {
    let mut group = Group::new(x, y, w, h, None);

    let mut heading = Frame::new(x + 60, y + 40, w - 120, 40, None);
    heading.set_label(PODCAST_NAME);
    heading.set_label_size(28);
    heading.set_label_font(Font::HelveticaBold);
    heading.set_label_color(pal.text);
    heading.set_align(Align::Inside | Align::Left);

    let mut blurb = Frame::new(x + 60, y + 100, w - 120, 60, None);
    blurb.set_label(PODCAST_BLURB);
    blurb.set_label_size(14);
    blurb.set_label_color(pal.muted);
    blurb.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

    let mut where_to = Frame::new(x + 60, y + 180, w - 120, 24, None);
    where_to.set_label("Listen wherever you get your podcasts:");
    where_to.set_label_size(13);
    where_to.set_label_color(pal.text);
    where_to.set_align(Align::Inside | Align::Left);

    for (i, link) in LISTEN_LINKS.iter().enumerate() {
        let mut button = Button::new(x + 60 + i as i32 * 180, y + 220, 160, 40, None);
        button.set_label(link.label);
        button.set_frame(FrameType::FlatBox);
        button.set_color(pal.surface);
        button.set_label_color(pal.accent);
        let url = link.url;
        button.set_callback(move |_| sender.send(Message::OpenExternal(url.to_string())));
    }

    group.end();
    group
}
