/// Purely presentational state; domain data lives in the store.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_route: Route,
    pub sidebar_index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Search,
    Library,
}

impl Route {
    pub const SIDEBAR: [Route; 3] = [Route::Home, Route::Search, Route::Library];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::Library => "Your Library",
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::SIDEBAR[index % Self::SIDEBAR.len()]
    }
}
