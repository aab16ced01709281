use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::{
    event::events::Event,
    http::SpotifyClient,
    ops::{self, PlayTarget},
    store::{Action, Slice},
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Command,
        tui::{TerminalEvent, Tui},
    },
    util::task::TaskManager,
};

const NOT_LOGGED_IN: &str = "Not logged in.";

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        if Self::handle_state_changes(app) {
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Paste(text) => app.router.on_paste(&text),
            TerminalEvent::Tick => {
                let expired = app.notifications.prune(Instant::now());
                return Ok(expired || app.has_focus);
            }
            TerminalEvent::Resize(_, _) => {}
        }

        Ok(true)
    }

    /// Applies one event coming from a view or a background task.
    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::Dispatch(action) => app.ctx.store.dispatch(action),
            Event::Notify(message) => {
                info!(message = %message, "notification");
                app.notifications.push(message);
            }
            Event::TrackRemoved { playlist_id, uri } => {
                let state = app.ctx.store.snapshot();
                match ops::without_track(&state, &playlist_id, &uri) {
                    Some(action) => app.ctx.store.dispatch(action),
                    None => debug!(playlist_id = %playlist_id, "removed track from a playlist no longer shown"),
                }
            }
            Event::PlaylistCreated(playlist) => {
                let state = app.ctx.store.snapshot();
                app.ctx.store.dispatch(ops::with_playlist(&state, playlist));
            }
            Event::SubmitToken(token) => {
                let token = token.trim().to_string();
                if !token.is_empty() {
                    app.ctx.store.dispatch(Action::SetToken(Some(token)));
                }
            }
            Event::Login { email, password } => {
                let auth = app.ctx.api.auth.clone();
                let config = app.ctx.config.clone();
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(ops::login(auth, config, email, password, tx));
            }
            Event::Register {
                email,
                username,
                password,
            } => {
                let auth = app.ctx.api.auth.clone();
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(ops::register(auth, email, username, password, tx));
            }
            Event::SelectPlaylist(playlist_id) => {
                app.ctx
                    .store
                    .dispatch(Action::SetPlaylistId(Some(playlist_id.clone())));
                app.navigate(0);
                if let Some(client) = Self::client(app) {
                    let tx = app.ctx.event_tx.clone();
                    tokio::spawn(ops::check_playlist_empty(client, playlist_id, tx));
                }
            }
            Event::PlayTrack(track) => Self::play(app, PlayTarget::from(&track)),
            Event::PlaySuggestion(track) => Self::play(app, PlayTarget::from(&track)),
            Event::DeleteTrack(track) => {
                let state = app.ctx.store.snapshot();
                let (Some(playlist_id), Some(client)) =
                    (state.selected_playlist_id.clone(), Self::client(app))
                else {
                    return;
                };
                let tx = app.ctx.event_tx.clone();
                tokio::spawn(ops::remove_track(client, playlist_id, track.uri, tx));
            }
            Event::AddToPlaylists(playlist_ids) => {
                let state = app.ctx.store.snapshot();
                let Some(uri) = state.current_uri().map(str::to_string) else {
                    app.notifications.push(ops::NOTHING_PLAYING);
                    return;
                };
                if let Some(client) = Self::client(app) {
                    let tx = app.ctx.event_tx.clone();
                    tokio::spawn(ops::add_to_playlists(client, uri, playlist_ids, tx));
                }
            }
            Event::CreatePlaylist(request) => {
                let state = app.ctx.store.snapshot();
                let user_id = state.user_info.as_ref().map(|u| u.user_id.clone());
                if let Some(client) = Self::client(app) {
                    let tx = app.ctx.event_tx.clone();
                    tokio::spawn(ops::create_playlist(client, user_id, request, tx));
                }
            }
            Event::Search(query) => {
                if let Some(client) = Self::client(app) {
                    let tx = app.ctx.event_tx.clone();
                    app.task_manager
                        .spawn(TaskManager::SEARCH, ops::search(client, query, tx));
                }
            }
            Event::TogglePlayback => {
                let playing = app.ctx.store.snapshot().player_state;
                if let Some(client) = Self::client(app) {
                    let tx = app.ctx.event_tx.clone();
                    app.task_manager
                        .detach("toggle_playback", ops::toggle_playback(client, playing, tx));
                }
            }
            Event::SearchResults(..)
            | Event::LoginStatus(_)
            | Event::RegisterStatus(_)
            | Event::AuthorizeReady(_) => {}
        }
    }

    /// Reacts to store changes queued since the previous turn.
    pub fn handle_state_changes(app: &mut App) -> bool {
        let state = app.ctx.store.snapshot();

        for slice in app.session_sub.drain() {
            match slice {
                Slice::Token => {
                    app.on_token_changed(&state);
                    if let Some(client) = app.ctx.spotify() {
                        let home = app.ctx.config.home_playlist.clone();
                        let tx = app.ctx.event_tx.clone();
                        app.task_manager.spawn(
                            TaskManager::SESSION,
                            ops::start_session(client, home, tx),
                        );
                    }
                }
                Slice::SelectedPlaylistId => {
                    if let (Some(playlist_id), Some(client)) =
                        (state.selected_playlist_id.clone(), app.ctx.spotify())
                    {
                        let tx = app.ctx.event_tx.clone();
                        app.task_manager.spawn(
                            TaskManager::PLAYLIST,
                            ops::load_playlist(client, playlist_id, tx),
                        );
                    }
                }
                _ => {}
            }
        }

        let changed = app.view_sub.drain();
        for slice in &changed {
            app.router.on_state_change(*slice, &state);
        }
        !changed.is_empty()
    }

    fn client(app: &mut App) -> Option<SpotifyClient> {
        let client = app.ctx.spotify();
        if client.is_none() {
            app.notifications.push(NOT_LOGGED_IN);
        }
        client
    }

    fn play(app: &mut App, target: PlayTarget) {
        if let Some(client) = Self::client(app) {
            let tx = app.ctx.event_tx.clone();
            app.task_manager.detach("play", ops::play(client, target, tx));
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        let state = app.ctx.store.snapshot();
        let global_navigation = state.is_authenticated() && !app.router.has_overlay();

        match evt.code {
            KeyCode::Char('c') if evt.modifiers == KeyModifiers::CONTROL => {
                app.update(AppMessage::Quit).await;
                return;
            }
            KeyCode::Tab if global_navigation => {
                app.update(AppMessage::NextSidebarItem).await;
                return;
            }
            KeyCode::BackTab if global_navigation => {
                app.update(AppMessage::PreviousSidebarItem).await;
                return;
            }
            _ => {}
        }

        let command = app.router.handle_input(evt, &state, &app.ctx).await;

        if let Some(command) = command {
            Self::run_command(app, command).await;
            return;
        }

        if !state.is_authenticated() {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }

    async fn run_command(app: &mut App, command: Command) {
        match command {
            Command::Consumed => {}
            Command::Quit => app.should_quit = true,
            Command::CloseOverlay => app.router.clear_overlay(),
            Command::Back => app.update(AppMessage::GoBack).await,
        }
    }
}
