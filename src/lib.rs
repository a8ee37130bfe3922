//! Browser-hosted booking form widget.
//!
//! A progressive-disclosure wizard (date -> party size -> time -> contact
//! details) plus thin wrappers around the flatpickr date/time pickers.
//!
//! This crate is intentionally a stub by default so host builds and unit
//! tests run without a wasm toolchain. Enable the real widget with
//! `--features web` (and a wasm32 target).

pub mod config;
pub mod picker;
pub mod steps;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{init_date_picker, init_time_picker, start};
