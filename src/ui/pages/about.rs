use fltk::{
    enums::{Align, Font},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::ABOUT_BODY;
use crate::ui::theme::Palette;

pub fn build(x: i32, y: i32, w: i32, h: i32, pal: &Palette) -> Group {
    let mut group = Group::new(x, y, w, h, None);

    let mut heading = Frame::new(x + 60, y + 40, w - 120, 40, None);
    heading.set_label("About");
    heading.set_label_size(28);
    heading.set_label_font(Font::HelveticaBold);
    heading.set_label_color(pal.text);
    heading.set_align(Align::Inside | Align::Left);

    let mut body = Frame::new(x + 60, y + 100, w - 120, h - 160, None);
    body.set_label(ABOUT_BODY);
    body.set_label_size(14);
    body.set_label_color(pal.muted);
    body.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

    group.end();
    group
}
