use fltk::{
    app,
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::content::BRAND_NAME;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 300)
        .with_label("About")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(BRAND_NAME);
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Desktop companion app for the Angel Kellogg brand");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 25);

    let info_text = "Copyright \u{00a9} 2026 Angel Kellogg Media\n\
         Licensed under the MIT License\n\n\
         Website: www.angelkellogg.com";

    let mut info_frame = Frame::default();
    info_frame.set_label(info_text);
    info_frame.set_label_size(12);
    info_frame.set_align(fltk::enums::Align::Center | fltk::enums::Align::Inside);
    flex.fixed(&info_frame, 90);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    while dialog.shown() {
        app::wait();
    }
}
