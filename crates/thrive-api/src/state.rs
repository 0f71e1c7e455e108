use std::sync::Arc;

use thrive_instruments::{all_instruments, Instrument};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub instruments: Arc<[Box<dyn Instrument>]>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            instruments: all_instruments().into(),
        }
    }

    pub fn instrument(&self, id: &str) -> Option<&dyn Instrument> {
        self.instruments
            .iter()
            .find(|i| i.id() == id)
            .map(|i| i.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
