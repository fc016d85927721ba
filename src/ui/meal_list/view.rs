use crate::ui::meal_list::state::{list_items, MealListState};
use crate::ui::strings;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{render_card, render_loading};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_meal_list(frame: &mut Frame<'_>, area: Rect, state: &MealListState, tick: u64) {
    match state {
        MealListState::Idle => {}
        MealListState::Loading => render_loading(frame, area, strings::LIST_LOADING, tick),
        MealListState::Failed { message } => render_card(
            frame,
            area,
            strings::ERROR_TITLE,
            vec![Line::from(message.clone())],
            None,
            STATUS_ERROR,
        ),
        MealListState::Loaded { meals, .. } if meals.is_empty() => {
            let empty = Paragraph::new(Line::from(Span::styled(
                strings::LIST_EMPTY,
                Style::default().fg(MUTED_TEXT),
            )));
            frame.render_widget(empty, area);
        }
        MealListState::Loaded { .. } => render_items(frame, area, state),
    }
}

fn render_items(frame: &mut Frame<'_>, area: Rect, state: &MealListState) {
    let items: Vec<ListItem> = list_items(state)
        .into_iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    item.title,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(item.subtitle, Style::default().fg(ACCENT))),
                Line::from(Span::styled(item.thumbnail, Style::default().fg(MUTED_TEXT))),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(state.selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
