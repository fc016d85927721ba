//! Small building blocks shared by both views.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Spinner plus caption, centred in `area`.
pub fn render_loading(frame: &mut Frame<'_>, area: Rect, caption: &str, tick: u64) {
    let lines = vec![
        Line::from(Span::styled(spinner_frame(tick), Style::default().fg(ACCENT))),
        Line::from(""),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(HEADER_TEXT))),
    ];
    let width = caption.chars().count() as u16 + 2;
    let rect = centered_rect_by_size(area, width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

/// Bordered card with a title, body lines and optional action hint.
pub fn render_card(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    body: Vec<Line<'static>>,
    action: Option<&str>,
    border: Color,
) {
    let mut lines = body;
    if let Some(action) = action {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[Esc] {action}"),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let content_width = lines
        .iter()
        .map(Line::width)
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0) as u16;
    let rect = centered_rect_by_size(
        area,
        content_width.saturating_add(4).max(30),
        lines.len() as u16 + 2,
    );

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
