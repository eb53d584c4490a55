//! Core data models for the timesheet engine.
//!
//! This module contains the domain models used throughout the engine.

mod entry;
mod form;

pub use entry::TimeEntry;
pub use form::{EntryForm, Meridiem};
