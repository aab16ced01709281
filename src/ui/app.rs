use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{
    config::Config,
    event::events::Event,
    http::ApiService,
    ops,
    store::{Action, AppState, Slice, Store, Subscription},
    util::task::TaskManager,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    notification::Notifications,
    router::Router,
    state::{Route, UiState},
    traits::View,
    tui::Tui,
    util::handler::EventHandler,
    views::{AddToPlaylist, CreatePlaylist, Login, PlaylistDetail, Playlists, Search},
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub router: Router,
    pub ui: UiState,
    pub notifications: Notifications,
    pub task_manager: TaskManager,
    /// Every slice, forwarded to the views.
    pub view_sub: Subscription,
    /// Slices that start background work.
    pub session_sub: Subscription,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub async fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&config)?);
        let store = Arc::new(Store::new());

        let view_sub = store.subscribe(&Slice::ALL);
        let session_sub = store.subscribe(&[Slice::Token, Slice::SelectedPlaylistId]);

        if let Some(token) = &config.token {
            info!("using access token from the environment");
            store.dispatch(Action::SetToken(Some(token.clone())));
        }

        let notifications = Notifications::new(config.notification_ttl);
        let initial_view: Box<dyn View> = if store.snapshot().is_authenticated() {
            Box::new(PlaylistDetail::default())
        } else {
            Box::new(Login::default())
        };

        Ok(Self {
            event_rx,
            ctx: AppContext {
                api,
                store,
                config: Arc::new(config),
                event_tx,
            },
            router: Router::new(initial_view),
            ui: UiState::default(),
            notifications,
            task_manager: TaskManager::new(),
            view_sub,
            session_sub,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?.paste(true);
        tui.enter()?;

        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| self.ui(f))?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.ctx.send(Event::TogglePlayback),
            AppMessage::GoBack => {
                if self.router.has_overlay() {
                    self.router.clear_overlay();
                } else {
                    self.router.pop();
                }
            }
            AppMessage::NextSidebarItem => {
                self.navigate((self.ui.sidebar_index + 1) % Route::SIDEBAR.len())
            }
            AppMessage::PreviousSidebarItem => self.navigate(
                (self.ui.sidebar_index + Route::SIDEBAR.len() - 1) % Route::SIDEBAR.len(),
            ),
            AppMessage::SetSidebarIndex(index) => self.navigate(index),
            AppMessage::OpenCreatePlaylist => {
                self.router.set_overlay(Box::new(CreatePlaylist::default()))
            }
            AppMessage::OpenAddToPlaylist => {
                if self.ctx.store.snapshot().current_uri().is_none() {
                    self.notifications.push(ops::NOTHING_PLAYING);
                } else {
                    self.router.set_overlay(Box::new(AddToPlaylist::default()));
                }
            }
            AppMessage::DismissNotification => self.notifications.dismiss(),
        }
    }

    /// Switches the content area to the sidebar entry at `index`.
    pub fn navigate(&mut self, index: usize) {
        let route = Route::from_index(index);
        self.ui.sidebar_index = index % Route::SIDEBAR.len();
        if self.ui.current_route == route && !self.router.has_overlay() {
            return;
        }
        self.ui.current_route = route;
        self.router.reset(Self::view_for(route));
    }

    /// Swaps between the login form and the signed-in views.
    pub fn on_token_changed(&mut self, state: &AppState) {
        self.ui = UiState::default();
        if state.is_authenticated() {
            self.router.reset(Self::view_for(Route::Home));
        } else {
            self.task_manager.abort_all();
            self.router.reset(Box::new(Login::default()));
        }
    }

    fn view_for(route: Route) -> Box<dyn View> {
        match route {
            Route::Home => Box::new(PlaylistDetail::default()),
            Route::Search => Box::new(Search::default()),
            Route::Library => Box::new(Playlists::default()),
        }
    }
}
