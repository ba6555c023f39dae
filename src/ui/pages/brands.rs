use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::VENTURES;
use crate::app::messages::Message;
use crate::ui::theme::Palette;

pub fn build(x: i32, y: i32, w: i32, h: i32, pal: &Palette, sender: Sender<Message>) -> Group {
    let mut group = Group::new(x, y, w, h, None);

    let mut heading = Frame::new(x + 60, y + 30, w - 120, 40, None);
    heading.set_label("The Brands");
    heading.set_label_size(28);
    heading.set_label_font(Font::HelveticaBold);
    heading.set_label_color(pal.text);
    heading.set_align(Align::Inside | Align::Left);

    for (i, venture) in VENTURES.iter().enumerate() {
        let card_y = y + 90 + i as i32 * 120;

        let mut card = Frame::new(x + 60, card_y, w - 120, 104, None);
        card.set_frame(FrameType::FlatBox);
        card.set_color(pal.surface);

        let mut name = Frame::new(x + 80, card_y + 12, 300, 26, None);
        name.set_label(venture.name);
        name.set_label_size(18);
        name.set_label_font(Font::HelveticaBold);
        name.set_label_color(pal.text);
        name.set_align(Align::Inside | Align::Left);

        let mut blurb = Frame::new(x + 80, card_y + 44, w - 320, 44, None);
        blurb.set_label(venture.blurb);
        blurb.set_label_size(13);
        blurb.set_label_color(pal.muted);
        blurb.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

        let mut visit = Button::new(x + w - 200, card_y + 36, 110, 32, None);
        visit.set_label("Visit");
        visit.set_frame(FrameType::FlatBox);
        visit.set_color(pal.accent);
        visit.set_label_color(pal.window_bg);
        let url = venture.url;
        visit.set_callback(move |_| sender.send(Message::OpenExternal(url.to_string())));
    }

    group.end();
    group
}
