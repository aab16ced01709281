use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    store::{AppState, Slice},
    ui::context::AppContext,
};

/// What a view asks the application to do after handling a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The key was used, nothing else to do.
    Consumed,
    CloseOverlay,
    Back,
    Quit,
}

#[async_trait]
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}

    /// Called on the loop turn after `slice` changed in the store.
    fn on_state_change(&mut self, _slice: Slice, _state: &AppState) {}

    fn on_paste(&mut self, _text: &str) {}
}
