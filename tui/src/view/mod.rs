pub mod game_details;
pub mod offers_list;
pub mod styles;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Model;
use crate::route::Route;
use styles::*;

pub const APP_TITLE: &str = "Daily Epic Games Freebies";
pub const APP_SUBTITLE: &str =
    "Discover the latest free games and upcoming offers from the Epic Games Store.";

pub fn view(frame: &mut Frame, model: &Model) {
    let bg_block = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(frame.area());

    render_header(frame, chunks[0]);

    match &model.route {
        Route::Home => offers_list::render_offers_list(frame, model, chunks[1]),
        Route::Game(_) => game_details::render_game_details(frame, model, chunks[1]),
        Route::NotFound(_) => game_details::render_not_found(frame, chunks[1]),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(BRAND_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            APP_SUBTITLE,
            Style::default().fg(TEXT_SECONDARY),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BRAND_ACCENT)),
    );
    frame.render_widget(header, area);
}
