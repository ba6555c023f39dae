use fltk::{group::Group, misc::HelpView, prelude::*};
use pulldown_cmark::{Options, Parser, html};

use crate::ui::theme::{Palette, hex};

pub const PRIVACY_MD: &str = include_str!("../../../assets/legal/privacy.md");
pub const TERMS_MD: &str = include_str!("../../../assets/legal/terms.md");

/// Render markdown text to raw HTML.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Legal pages are markdown shipped with the app, rendered to HTML at
/// first mount and shown in a HelpView.
pub fn build(x: i32, y: i32, w: i32, h: i32, pal: &Palette, markdown: &str) -> Group {
    let mut group = Group::new(x, y, w, h, None);

    let body = render_markdown(markdown);
    let page = format!(
        "<body bgcolor=\"{}\" text=\"{}\" link=\"{}\">{}</body>",
        hex(pal.window_bg),
        hex(pal.text),
        hex(pal.accent),
        body
    );

    let mut view = HelpView::new(x + 40, y + 20, w - 80, h - 40, None);
    view.set_value(&page);
    view.set_text_size(14);

    group.end();
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_embedded_documents_nonempty() {
        assert!(PRIVACY_MD.contains("# Privacy Policy"));
        assert!(TERMS_MD.contains("# Terms of Use"));
    }
}
