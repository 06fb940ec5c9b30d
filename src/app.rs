//! Application navigation state
//!
//! The reference UI toggles between a welcome page and the main advisor
//! page. Modeled here as an explicit finite-state value with exactly two
//! transitions, so front-ends can keep navigation out of global mutable
//! state.

use serde::{Deserialize, Serialize};

/// Which page of the application is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Welcome page with the start button
    Home,
    /// Main advisor page with inputs and plan output
    Main,
}

/// Navigation events a front-end can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    StartInvesting,
    BackToHome,
}

impl Page {
    /// Apply a navigation event. Only two transitions exist:
    /// StartInvesting (Home -> Main) and BackToHome (Main -> Home);
    /// every other (page, event) pair leaves the page unchanged.
    pub fn apply(self, event: PageEvent) -> Page {
        match (self, event) {
            (Page::Home, PageEvent::StartInvesting) => Page::Main,
            (Page::Main, PageEvent::BackToHome) => Page::Home,
            (page, _) => page,
        }
    }
}

/// Explicit application state passed to a render function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub page: Page,
}

impl AppState {
    /// Fresh state, starting on the welcome page
    pub fn new() -> Self {
        Self { page: Page::Home }
    }

    pub fn start_investing(&mut self) {
        self.page = self.page.apply(PageEvent::StartInvesting);
    }

    pub fn back_to_home(&mut self) {
        self.page = self.page.apply(PageEvent::BackToHome);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
