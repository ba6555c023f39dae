use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::{HeroContent, TAGLINE};
use crate::app::messages::Message;
use crate::ui::theme::Palette;

/// Landing page. Hero copy comes from [`HeroContent::from_env`], read
/// once here when the page first mounts.
pub fn build(x: i32, y: i32, w: i32, h: i32, pal: &Palette, sender: Sender<Message>) -> Group {
    let mut group = Group::new(x, y, w, h, None);
    let hero = HeroContent::from_env();

    let mut tagline = Frame::new(x, y + 60, w, 24, None);
    tagline.set_label(TAGLINE);
    tagline.set_label_size(14);
    tagline.set_label_color(pal.accent);

    let mut title = Frame::new(x, y + 96, w, 56, None);
    title.set_label(&hero.title);
    title.set_label_size(40);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(pal.text);

    let mut subtitle = Frame::new(x + 180, y + 160, w - 360, 60, None);
    subtitle.set_label(&hero.subtitle);
    subtitle.set_label_size(15);
    subtitle.set_label_color(pal.muted);
    subtitle.set_align(Align::Inside | Align::Center | Align::Wrap);

    let mut explore = Button::new(x + w / 2 - 200, y + 260, 190, 40, None);
    explore.set_label("Explore the Brands");
    explore.set_frame(FrameType::FlatBox);
    explore.set_color(pal.accent);
    explore.set_label_color(pal.window_bg);
    explore.set_callback(move |_| sender.send(Message::Navigate("/brands".to_string())));

    let mut listen = Button::new(x + w / 2 + 10, y + 260, 190, 40, None);
    listen.set_label("Listen to the Show");
    listen.set_frame(FrameType::FlatBox);
    listen.set_color(pal.surface);
    listen.set_label_color(pal.text);
    listen.set_callback(move |_| sender.send(Message::Navigate("/media".to_string())));

    // Optional media overrides become outbound links; the app renders
    // no remote images or video itself.
    let mut media_x = x + w / 2 - 200;
    if let Some(url) = hero.image_url {
        let mut button = Button::new(media_x, y + 320, 190, 30, None);
        button.set_label("View the cover shoot");
        button.set_frame(FrameType::FlatBox);
        button.set_color(pal.surface);
        button.set_label_color(pal.accent);
        button.set_callback(move |_| sender.send(Message::OpenExternal(url.clone())));
        media_x += 210;
    }
    if let Some(url) = hero.video_url {
        let mut button = Button::new(media_x, y + 320, 190, 30, None);
        button.set_label("Watch the film");
        button.set_frame(FrameType::FlatBox);
        button.set_color(pal.surface);
        button.set_label_color(pal.accent);
        button.set_callback(move |_| sender.send(Message::OpenExternal(url.clone())));
    }

    group.end();
    group
}
