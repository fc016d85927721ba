use crate::ui::meal_detail::MealDetailState;
use crate::ui::navigation::Route;
use crate::ui::strings;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// On the detail route the description names the meal once it is known.
    pub fn widget(&self, route: &Route, detail: &MealDetailState) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (title, description) = match route {
            Route::MealList => (strings::LIST_TITLE, strings::LIST_DESCRIPTION.to_string()),
            Route::MealDetail { .. } => (strings::DETAIL_TITLE, detail_description(detail)),
        };

        let line = Line::from(vec![
            Span::styled("  🍴  ", text_style),
            Span::styled(title, title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(description, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn detail_description(detail: &MealDetailState) -> String {
    match (detail.meal(), detail.meal_id()) {
        (Some(meal), _) => meal.name.clone(),
        (None, Some(id)) => format!("idMeal {id}"),
        (None, None) => strings::DETAIL_DESCRIPTION.to_string(),
    }
}
