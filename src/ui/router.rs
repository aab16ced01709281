use crate::event::events::Event;
use crate::store::{AppState, Slice};
use crate::ui::context::AppContext;
use crate::ui::traits::{Command, View};
use crate::ui::util::centered_rect;
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

pub struct Router {
    pub stack: Vec<Box<dyn View>>,
    pub overlay: Option<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            stack: vec![initial_view],
            overlay: None,
        }
    }

    pub fn push(&mut self, view: Box<dyn View>) {
        self.stack.push(view);
    }

    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Drops the whole stack and the overlay, leaving `view` as the root.
    pub fn reset(&mut self, view: Box<dyn View>) {
        self.overlay = None;
        self.stack.clear();
        self.stack.push(view);
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn active_view_mut(&mut self) -> Option<&mut Box<dyn View>> {
        if self.overlay.is_some() {
            self.overlay.as_mut()
        } else {
            self.stack.last_mut()
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, state, ctx);
        }

        if let Some(overlay) = &mut self.overlay {
            let popup = centered_rect(60, 60, area);
            f.render_widget(Clear, popup);
            overlay.render(f, popup, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Command> {
        match self.active_view_mut() {
            Some(view) => view.handle_input(key, state, ctx).await,
            None => None,
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if let Some(view) = self.active_view_mut() {
            view.on_paste(text);
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for view in &mut self.stack {
            view.on_event(event, ctx).await;
        }

        if let Some(overlay) = &mut self.overlay {
            overlay.on_event(event, ctx).await;
        }
    }

    pub fn on_state_change(&mut self, slice: Slice, state: &AppState) {
        for view in &mut self.stack {
            view.on_state_change(slice, state);
        }

        if let Some(overlay) = &mut self.overlay {
            overlay.on_state_change(slice, state);
        }
    }
}
