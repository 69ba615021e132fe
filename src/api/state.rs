//! Application state for the shift calendar API.

use std::sync::Arc;

use crate::calendar::Roster;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded calendar configuration, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a roster over the loaded configuration.
    pub fn roster(&self) -> Roster<'_> {
        Roster::new(
            self.config.calendar(),
            self.config.catalog(),
            self.config.hours(),
        )
    }
}
