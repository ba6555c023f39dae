use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    prelude::*,
};

use crate::app::contact::{ContactMessage, FieldErrors};
use crate::app::messages::Message;
use crate::ui::theme::Palette;

/// Plain field values, used to carry in-progress input across a page
/// rebuild (theme switch).
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Handles to the form widgets the coordinator needs to read values,
/// surface per-field errors, and drive the submit control.
pub struct ContactWidgets {
    pub name_input: Input,
    pub email_input: Input,
    pub message_input: MultilineInput,
    pub name_error: Frame,
    pub email_error: Frame,
    pub message_error: Frame,
    pub submit_button: Button,
    pub status: Frame,
    accent: Color,
    error: Color,
}

fn labeled(x: i32, y: i32, text: &str, pal: &Palette) -> Frame {
    let mut label = Frame::new(x, y, 200, 20, None);
    label.set_label(text);
    label.set_label_size(13);
    label.set_label_color(pal.text);
    label.set_align(Align::Inside | Align::Left);
    label
}

fn error_frame(x: i32, y: i32, pal: &Palette) -> Frame {
    let mut frame = Frame::new(x, y, 420, 16, None);
    frame.set_label_size(11);
    frame.set_label_color(pal.error);
    frame.set_align(Align::Inside | Align::Left);
    frame
}

fn style_input<I: InputExt>(input: &mut I, pal: &Palette) {
    input.set_color(pal.surface);
    input.set_text_color(pal.text);
    input.set_cursor_color(pal.text);
    input.set_text_size(14);
    input.set_frame(FrameType::FlatBox);
}

pub fn build(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    pal: &Palette,
    sender: Sender<Message>,
) -> (Group, ContactWidgets) {
    let mut group = Group::new(x, y, w, h, None);
    let left = x + 60;

    let mut heading = Frame::new(left, y + 24, w - 120, 36, None);
    heading.set_label("Get in Touch");
    heading.set_label_size(28);
    heading.set_label_font(Font::HelveticaBold);
    heading.set_label_color(pal.text);
    heading.set_align(Align::Inside | Align::Left);

    labeled(left, y + 72, "Name", pal);
    let mut name_input = Input::new(left, y + 94, 420, 30, None);
    style_input(&mut name_input, pal);
    let name_error = error_frame(left, y + 126, pal);

    labeled(left, y + 148, "Email", pal);
    let mut email_input = Input::new(left, y + 170, 420, 30, None);
    style_input(&mut email_input, pal);
    let email_error = error_frame(left, y + 202, pal);

    labeled(left, y + 224, "Message", pal);
    let mut message_input = MultilineInput::new(left, y + 246, 420, 130, None);
    style_input(&mut message_input, pal);
    message_input.set_wrap(true);
    let message_error = error_frame(left, y + 380, pal);

    let mut submit_button = Button::new(left, y + 408, 160, 38, None);
    submit_button.set_label("Send Message");
    submit_button.set_frame(FrameType::FlatBox);
    submit_button.set_color(pal.accent);
    submit_button.set_label_color(pal.window_bg);
    submit_button.set_callback(move |_| sender.send(Message::SubmitContact));

    let mut status = Frame::new(left + 180, y + 408, w - left - 240, 38, None);
    status.set_label_size(13);
    status.set_align(Align::Inside | Align::Left | Align::Wrap);

    group.end();

    let widgets = ContactWidgets {
        name_input,
        email_input,
        message_input,
        name_error,
        email_error,
        message_error,
        submit_button,
        status,
        accent: pal.accent,
        error: pal.error,
    };
    (group, widgets)
}

impl ContactWidgets {
    /// Current field values as the outbound message.
    pub fn message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name_input.value(),
            email: self.email_input.value(),
            message: self.message_input.value(),
        }
    }

    /// Show (or clear) the inline error next to each field.
    pub fn show_errors(&mut self, errors: &FieldErrors) {
        self.name_error.set_label(errors.name.unwrap_or(""));
        self.email_error.set_label(errors.email.unwrap_or(""));
        self.message_error.set_label(errors.message.unwrap_or(""));
    }

    /// Cleared only on success; errors keep the visitor's input.
    pub fn clear_fields(&mut self) {
        self.name_input.set_value("");
        self.email_input.set_value("");
        self.message_input.set_value("");
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            self.submit_button.set_label("Sending\u{2026}");
            self.submit_button.deactivate();
        } else {
            self.submit_button.set_label("Send Message");
            self.submit_button.activate();
        }
    }

    pub fn set_status_success(&mut self, text: &str) {
        self.status.set_label_color(self.accent);
        self.status.set_label(text);
    }

    pub fn set_status_error(&mut self, text: &str) {
        self.status.set_label_color(self.error);
        self.status.set_label(text);
    }

    pub fn clear_status(&mut self) {
        self.status.set_label("");
    }

    pub fn snapshot(&self) -> ContactDraft {
        ContactDraft {
            name: self.name_input.value(),
            email: self.email_input.value(),
            message: self.message_input.value(),
        }
    }

    pub fn restore(&mut self, draft: &ContactDraft) {
        self.name_input.set_value(&draft.name);
        self.email_input.set_value(&draft.email);
        self.message_input.set_value(&draft.message);
    }
}
