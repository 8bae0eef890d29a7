use chrono::{DateTime, Utc};
use freebies_core::models::Offer;
use freebies_core::resolver::{self, Collection};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::styles::*;
use crate::model::Model;

pub const EMPTY_SECTION: &str = "No games to display currently.";
pub const SEARCH_PLACEHOLDER: &str = "Search free games by title...";

pub fn render_offers_list(frame: &mut Frame, model: &Model, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // banner
            Constraint::Min(6),    // sections
            Constraint::Length(1), // status
        ])
        .split(area);

    render_search_bar(frame, model, chunks[0]);
    render_banner(frame, model, chunks[1]);

    if model.loading.catalog {
        let padding = vertical_padding(chunks[2].height, 1);
        let loading = Paragraph::new(format!(
            "{}{} Loading free games...",
            padding,
            model.spinner_char()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));
        frame.render_widget(loading, chunks[2]);
    } else {
        render_sections(frame, model, chunks[2]);
    }

    let status = build_status_line(&[
        ("/", "search"),
        ("↑↓", "move"),
        ("⏎", "open"),
        ("c", "clear"),
        ("r", "refresh"),
        ("q", "quit"),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[3]);
}

fn render_search_bar(frame: &mut Frame, model: &Model, area: Rect) {
    let border_color = if model.search.active {
        SHORTCUT_KEY
    } else {
        BRAND_ACCENT
    };

    let content = if model.search.active {
        Line::from(vec![
            Span::styled(model.search.term.clone(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("_", Style::default().fg(SHORTCUT_KEY)),
        ])
    } else if model.search.term.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(TEXT_DIMMED)))
    } else {
        Line::from(Span::styled(
            model.search.term.clone(),
            Style::default().fg(TEXT_SECONDARY),
        ))
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(build_title("Search", border_color, TEXT_PRIMARY)),
    );
    frame.render_widget(search, area);
}

/// Load error, or the no-match notice for the current search
fn render_banner(frame: &mut Frame, model: &Model, area: Rect) {
    let banner = if let Some(error) = &model.error {
        Span::styled(
            error.clone(),
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        )
    } else if model.no_search_results() {
        Span::styled(
            format!("No games found matching \"{}\".", model.search.term),
            Style::default().fg(TEXT_SECONDARY),
        )
    } else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Line::from(banner)).alignment(Alignment::Center),
        area,
    );
}

fn render_sections(frame: &mut Frame, model: &Model, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let now = Utc::now();
    let current = model.filtered(Collection::Current);
    let upcoming = model.filtered(Collection::Upcoming);

    // The selection index runs across both sections
    let (current_selected, upcoming_selected) = if model.ui.selected < current.len() {
        (Some(model.ui.selected), None)
    } else {
        (None, Some(model.ui.selected - current.len()))
    };

    render_section(frame, Collection::Current, &current, current_selected, now, halves[0]);
    render_section(frame, Collection::Upcoming, &upcoming, upcoming_selected, now, halves[1]);
}

fn render_section(
    frame: &mut Frame,
    collection: Collection,
    offers: &[&Offer],
    selected: Option<usize>,
    now: DateTime<Utc>,
    area: Rect,
) {
    let title_text = format!("{} ({})", collection.title(), offers.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ACCENT))
        .title(build_title(&title_text, BRAND_ACCENT, TEXT_PRIMARY));

    if offers.is_empty() {
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}{}", padding, EMPTY_SECTION))
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_SECONDARY))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let badge_color = match collection {
        Collection::Current => ACCENT_GREEN,
        Collection::Upcoming => ACCENT_YELLOW,
    };

    let rows: Vec<Row> = offers
        .iter()
        .map(|offer| {
            let card = Text::from(vec![
                Line::from(Span::styled(
                    offer.title.clone(),
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    offer.description.clone(),
                    Style::default().fg(TEXT_SECONDARY),
                )),
            ]);
            let date = resolver::date_label(offer, collection, now)
                .map(|label| label.to_string())
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(card),
                Cell::from(Line::from(badge(collection.badge(), badge_color))),
                Cell::from(date).style(Style::default().fg(TEXT_SECONDARY)),
            ])
            .height(2)
        })
        .collect();

    let widths = [
        Constraint::Min(30),
        Constraint::Length(14),
        Constraint::Length(24),
    ];

    let table = Table::new(rows, widths)
        .block(block)
        .row_highlight_style(Style::default().bg(BG_HIGHLIGHT))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
