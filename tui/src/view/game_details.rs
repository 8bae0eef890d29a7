use freebies_core::models::Offer;
use freebies_core::resolver;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::styles::*;
use crate::model::{DetailState, Model, SummaryState};

pub fn render_game_details(frame: &mut Frame, model: &Model, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let title = build_title("Game Details", BRAND_ACCENT, TEXT_PRIMARY);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ACCENT))
        .title(title);

    match &model.detail {
        DetailState::Found { offer, summary, .. } => {
            let lines = detail_lines(model, offer, summary);
            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((model.ui.detail_scroll, 0));
            frame.render_widget(paragraph, chunks[0]);
        }
        DetailState::NotFound(_) => {
            render_not_found(frame, area);
            return;
        }
        DetailState::Resolving(_) | DetailState::Idle => {
            let padding = vertical_padding(chunks[0].height, 1);
            let loading =
                Paragraph::new(format!("{}{} Loading game...", padding, model.spinner_char()))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT_PRIMARY))
                    .block(block);
            frame.render_widget(loading, chunks[0]);
        }
    }

    let status = build_status_line(&[
        ("o", "open in store"),
        ("↑↓", "scroll"),
        ("esc", "back"),
        ("q", "quit"),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn detail_lines<'a>(model: &Model, offer: &'a Offer, summary: &'a SummaryState) -> Vec<Line<'a>> {
    let label = Style::default().fg(BRAND_LIGHT);
    let secondary = Style::default().fg(TEXT_SECONDARY);
    let mut lines: Vec<Line> = Vec::new();

    // Title and seller
    lines.push(Line::from(Span::styled(
        offer.title.as_str(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    if !offer.seller.name.is_empty() {
        lines.push(Line::from(Span::styled(offer.seller.name.as_str(), secondary)));
    }

    // Badges
    let mut badges: Vec<Span> = Vec::new();
    if let Some(kind) = offer.offer_type.label() {
        badges.push(badge(kind, BRAND_PRIMARY));
    }
    for category in resolver::category_badges(offer) {
        if !badges.is_empty() {
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(format!("[{}]", category), secondary));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }
    lines.push(Line::from(""));

    // Links
    if let Some(banner) = resolver::banner_url(offer) {
        lines.push(Line::from(vec![
            Span::styled("Banner: ", label),
            Span::styled(banner, secondary),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("View on Epic Store: ", label),
        Span::styled(
            model.store_links.product_url(offer),
            Style::default()
                .fg(BRAND_PRIMARY)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines.push(Line::from(""));

    // Description
    lines.push(heading("Description"));
    for paragraph in offer.description.lines() {
        lines.push(Line::from(Span::styled(paragraph, secondary)));
    }
    lines.push(Line::from(""));

    // AI summary
    match summary {
        SummaryState::Loading => {
            lines.push(heading("AI Summary"));
            lines.push(Line::from(Span::styled(
                format!("{} Generating summary...", model.spinner_char()),
                secondary,
            )));
        }
        SummaryState::Ready(text) => {
            lines.push(heading("AI Summary"));
            lines.push(Line::from(Span::styled(
                text.as_str(),
                Style::default().fg(TEXT_PRIMARY),
            )));
        }
        SummaryState::Failed(message) => {
            let alert = Style::default().fg(ERROR_RED);
            lines.push(Line::from(Span::styled(
                "AI Summary Error",
                alert.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(message.as_str(), alert)));
        }
    }

    // Gallery
    let gallery = resolver::gallery(offer);
    if !gallery.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Screenshots"));
        for image in gallery {
            lines.push(Line::from(vec![
                Span::styled("• ", label),
                Span::styled(image.url.as_str(), secondary),
            ]));
        }
    }

    lines
}

pub fn render_not_found(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ACCENT))
        .title(build_title("Not Found", BRAND_ACCENT, TEXT_PRIMARY));

    let padding = vertical_padding(chunks[0].height, 2);
    let mut lines: Vec<Line> = padding.chars().map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "404",
        Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "This page could not be found.",
        Style::default().fg(TEXT_SECONDARY),
    )));

    let not_found = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(not_found, chunks[0]);

    let status = build_status_line(&[("esc", "back"), ("q", "quit")]);
    frame.render_widget(Paragraph::new(status), chunks[1]);
}
