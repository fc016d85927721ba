use crate::api::Meal;
use crate::ui::meal_detail::state::MealDetailState;
use crate::ui::strings;
use crate::ui::theme::{ACCENT, CARD_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{render_card, render_loading};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_meal_detail(frame: &mut Frame<'_>, area: Rect, state: &MealDetailState, tick: u64) {
    match state {
        MealDetailState::Idle => {}
        MealDetailState::MissingParam => render_card(
            frame,
            area,
            strings::DETAIL_MISSING_TITLE,
            vec![Line::from(strings::DETAIL_MISSING_BODY)],
            Some(strings::BACK),
            CARD_BORDER,
        ),
        MealDetailState::Loading { .. } => {
            render_loading(frame, area, strings::DETAIL_LOADING, tick)
        }
        MealDetailState::NotFound { id } => render_card(
            frame,
            area,
            strings::DETAIL_NOT_FOUND,
            vec![Line::from(Span::styled(
                format!("idMeal = {id}"),
                Style::default().fg(MUTED_TEXT),
            ))],
            Some(strings::BACK),
            CARD_BORDER,
        ),
        MealDetailState::Failed { .. } => render_card(
            frame,
            area,
            strings::ERROR_TITLE,
            vec![Line::from(strings::DETAIL_ERROR)],
            Some(strings::BACK),
            STATUS_ERROR,
        ),
        MealDetailState::Loaded { meal, scroll } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER));
            let paragraph = detail_paragraph(meal).block(block).scroll((*scroll, 0));
            frame.render_widget(paragraph, area);
        }
    }
}

/// Every line of the loaded detail card, before wrapping.
pub fn detail_lines(meal: &Meal) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            meal.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            strings::meal_subtitle(meal.category.as_deref(), meal.area.as_deref()),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
    ];

    if !meal.thumbnail.is_empty() {
        lines.push(Line::from(Span::styled(
            meal.thumbnail.clone(),
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        strings::DETAIL_INSTRUCTIONS,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let instructions = meal
        .instructions
        .as_deref()
        .unwrap_or(strings::NO_INSTRUCTIONS);
    // The API separates paragraphs with CRLF.
    lines.extend(
        instructions
            .split('\n')
            .map(|line| Line::from(line.trim_end_matches('\r').to_string())),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[Esc] {}", strings::BACK),
        Style::default().fg(MUTED_TEXT),
    )));
    lines
}

fn detail_paragraph(meal: &Meal) -> Paragraph<'static> {
    Paragraph::new(detail_lines(meal)).wrap(Wrap { trim: false })
}

/// Rows the detail card's content needs once word-wrapped to `width`
/// columns (inside the border).
pub fn content_height(meal: &Meal, width: u16) -> u16 {
    if width == 0 {
        return detail_lines(meal).len() as u16;
    }
    let rows = detail_paragraph(meal).line_count(width);
    rows.min(u16::MAX as usize) as u16
}
