use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::loader::load_document;
use iced::widget::scrollable::RelativeOffset;
use iced::{Event, Task, event, keyboard, window};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadDocument(path) => {
                let requested_path = path.clone();
                Task::perform(
                    async move {
                        match load_document(&requested_path) {
                            Ok(document) => Message::DocumentLoaded {
                                path: requested_path,
                                document,
                            },
                            Err(err) => Message::DocumentLoadFailed {
                                path: requested_path,
                                error: err.to_string(),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::ScrollToTop => {
                iced::widget::scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::Quit => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
