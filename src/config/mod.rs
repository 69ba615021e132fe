//! Configuration loading and management for the shift calendar.
//!
//! This module loads the reference date, working hours and shift pattern
//! table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Reference date: {}", config.calendar().reference_date());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, CalendarSettings, PatternsConfig, WorkingHours};
