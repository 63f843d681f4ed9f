//! Application state container.
//!
//! `AppState` is created once by the root component and passed as a prop to
//! the views that need it. It is `Copy` (a bundle of signals), so passing it
//! around is free. Nothing reads it from ambient context.

use bbank_chart::Theme;
use bbank_core::ApiConfig;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    /// Dark colour scheme for the page and every figure
    pub dark_mode: Signal<bool>,
    /// Where chart panels fetch from; changing it refetches every panel
    pub api: Signal<ApiConfig>,
}

impl AppState {
    /// Must be called from inside a hook (e.g. `use_hook`) at the app root.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            dark_mode: Signal::new(false),
            api: Signal::new(api),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode((self.dark_mode)())
    }
}
