use crate::ui::app::App;
use crate::ui::composer::render_composer;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, layout_regions};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Width of the composer column on wide terminals.
const MAX_CONTENT_WIDTH: u16 = 100;

/// Area the composer occupies on a screen of size `area`.
pub fn composer_area(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    centered_column(MAX_CONTENT_WIDTH, body)
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, _, footer) = layout_regions(area);
    frame.render_widget(Header::new().widget(), header);
    render_composer(frame, composer_area(area), app.state());
    frame.render_widget(Footer::new().widget(app.state()), footer);
}
