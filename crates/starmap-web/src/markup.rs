// Panel markup. Pure string building so it can be tested on the host.

use starmap_core::{PanelLayout, Poi};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner HTML of an info panel. Sheets get a drag handle above the title.
pub fn panel_inner_html(poi: &Poi, layout: PanelLayout) -> String {
    let handle = match layout {
        PanelLayout::Sheet => "<div class='info-panel__handle'></div>",
        PanelLayout::Floating => "",
    };
    format!(
        "{}<button class='info-panel__close' aria-label='Close'>&times;</button>\
<h2 class='info-panel__title' style='color: {}'>{}</h2>\
<p class='info-panel__body'>{}</p>",
        handle,
        poi.css_color(),
        escape_html(&poi.name),
        escape_html(&poi.description)
    )
}
