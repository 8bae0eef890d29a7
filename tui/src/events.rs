use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::message::Message;
use crate::model::Model;
use crate::route::Route;

pub fn handle_event(model: &Model, poll_duration: std::time::Duration) -> Result<Option<Message>> {
    if !event::poll(poll_duration)? {
        return Ok(Some(Message::Tick));
    }
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            return Ok(handle_key(model, key.code));
        }
    }
    Ok(None)
}

pub fn handle_key(model: &Model, code: KeyCode) -> Option<Message> {
    match &model.route {
        Route::Home if model.search.active => handle_search_key(code),
        Route::Home => handle_list_key(code),
        Route::Game(_) => handle_detail_key(code),
        Route::NotFound(_) => handle_not_found_key(code),
    }
}

fn handle_search_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::CancelSearch),
        KeyCode::Enter => Some(Message::ConfirmSearch),
        KeyCode::Backspace => Some(Message::SearchPop),
        KeyCode::Char(c) => Some(Message::SearchPush(c)),
        _ => None,
    }
}

fn handle_list_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectPrevious),
        KeyCode::Char('/') | KeyCode::Char('f') => Some(Message::StartSearch),
        KeyCode::Enter => Some(Message::OpenSelected),
        KeyCode::Char('r') => Some(Message::RequestRefresh),
        KeyCode::Char('c') => Some(Message::ClearSearch),
        _ => None,
    }
}

fn handle_detail_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Backspace => Some(Message::Back),
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('o') => Some(Message::OpenInStore),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp),
        KeyCode::Char('r') => Some(Message::RequestRefresh),
        _ => None,
    }
}

fn handle_not_found_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => Some(Message::Back),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freebies_core::resolver::StoreLinks;

    #[test]
    fn search_mode_captures_letters() {
        let mut model = Model::new(StoreLinks::default());
        model.search.active = true;
        assert!(matches!(
            handle_key(&model, KeyCode::Char('q')),
            Some(Message::SearchPush('q'))
        ));
        assert!(matches!(
            handle_key(&model, KeyCode::Esc),
            Some(Message::CancelSearch)
        ));
    }

    #[test]
    fn list_keys() {
        let model = Model::new(StoreLinks::default());
        assert!(matches!(handle_key(&model, KeyCode::Char('q')), Some(Message::Quit)));
        assert!(matches!(
            handle_key(&model, KeyCode::Char('/')),
            Some(Message::StartSearch)
        ));
        assert!(matches!(
            handle_key(&model, KeyCode::Enter),
            Some(Message::OpenSelected)
        ));
    }

    #[test]
    fn detail_keys() {
        let mut model = Model::new(StoreLinks::default());
        model.route = Route::game("chuchel-203808");
        assert!(matches!(handle_key(&model, KeyCode::Esc), Some(Message::Back)));
        assert!(matches!(
            handle_key(&model, KeyCode::Char('o')),
            Some(Message::OpenInStore)
        ));
        assert!(handle_key(&model, KeyCode::Char('/')).is_none());
    }
}
