use crate::ui::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, route: &Route) -> Paragraph<'static> {
        let hints = match route {
            Route::MealList => " ↑/↓: Move │ Enter: Open │ Esc/Q: Quit",
            Route::MealDetail { .. } => " ↑/↓ PgUp/PgDn: Scroll │ Esc: Back │ Q: Quit",
        };
        let version = format!("v{VERSION} ");
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // Version sits flush right inside the border.
        let inner = area.width.saturating_sub(2) as usize;
        let gap = inner.saturating_sub(hints.chars().count() + version.chars().count());
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(gap)),
            Span::raw(version),
        ]);

        Paragraph::new(line)
            .style(style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
