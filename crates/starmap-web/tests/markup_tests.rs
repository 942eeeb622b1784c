// Host-side tests for info panel markup.
// The web crate only builds for wasm32, so the pure module is included directly.

mod markup {
    include!("../src/markup.rs");
}

use glam::Vec3;
use markup::{escape_html, panel_inner_html};
use starmap_core::{PanelLayout, Poi};

fn sample() -> Poi {
    Poi::new(
        Vec3::ZERO,
        0xff8800,
        "Barnard's <Star>",
        "Fast & faint red dwarf.",
    )
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn panel_contains_escaped_title_body_and_close_button() {
    let html = panel_inner_html(&sample(), PanelLayout::Floating);
    assert!(html.contains("Barnard&#39;s &lt;Star&gt;"));
    assert!(html.contains("Fast &amp; faint red dwarf."));
    assert!(html.contains("info-panel__close"));
    assert!(html.contains("color: #ff8800"));
    assert!(!html.contains("<Star>"));
}

#[test]
fn only_sheets_get_a_drag_handle() {
    assert!(panel_inner_html(&sample(), PanelLayout::Sheet).contains("info-panel__handle"));
    assert!(!panel_inner_html(&sample(), PanelLayout::Floating).contains("info-panel__handle"));
}
