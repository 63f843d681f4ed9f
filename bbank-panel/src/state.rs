//! Per-panel async load state with generation-tagged requests.
//!
//! ```text
//! Idle ──begin──▶ Loading ──settle──▶ Success ──refresh──▶ Loading
//!                   ▲   │
//!                 retry └──settle──▶ Error ──dismiss──▶ Idle
//!                   ▲                                        │
//!                   └──────────────── retry ─────────────────┘
//! ```
//!
//! A dismissed panel is Idle with a non-zero generation; `retry` reloads it.
//!
//! Every `begin`/`retry`/`refresh` bumps the generation and hands out a
//! [`Ticket`]. `settle` only applies a result whose ticket matches the
//! current generation, so a response from a superseded request or from
//! before `teardown` is dropped.

use log::debug;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Proof of which request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTracker<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for LoadTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadTracker<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a request from any state (mount, reload).
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Whether any request has been issued yet.
    pub fn has_started(&self) -> bool {
        self.generation != 0
    }

    /// Re-issue after a failure or a dismiss, or while a request is still
    /// pending. The pending request's ticket becomes stale.
    pub fn retry(&mut self) -> Option<Ticket> {
        match self.state {
            LoadState::Error(_) | LoadState::Loading => Some(self.begin()),
            LoadState::Idle if self.has_started() => Some(self.begin()),
            _ => None,
        }
    }

    /// Invalidate loaded data and fetch again.
    pub fn refresh(&mut self) -> Option<Ticket> {
        match self.state {
            LoadState::Success(_) => Some(self.begin()),
            _ => None,
        }
    }

    /// Apply the outcome of the request `ticket` was issued for.
    ///
    /// Returns `true` if the state changed, `false` if the result was stale.
    pub fn settle<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            debug!(
                "Discarding response for generation {} (current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(data) => LoadState::Success(data),
            Err(e) => LoadState::Error(e.to_string()),
        };
        true
    }

    /// Close the error panel without retrying.
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.state, LoadState::Error(_)) {
            self.state = LoadState::Idle;
            true
        } else {
            false
        }
    }

    /// The owning view is going away: anything still in flight is ignored.
    pub fn teardown(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Idle;
    }
}
