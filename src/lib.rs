//! Shift calendar for rotating staff schedules.
//!
//! This crate decides whether a calendar date is a working day or a rest day
//! for a staff member under a fixed, rotating or manual shift pattern, and
//! which days of a week are statutory reduced-hour days.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
