//! Ladder Harness: dictionary loading, orchestration and presentation.
//!
//! The harness loads a word list, runs `ladder_search` once per configured
//! mode and turns the resulting reports into text or digestible JSON.
//!
//! The harness does NOT implement search logic; it delegates to
//! `ladder_search`. Presentation lives here, not in the engine.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dictionary;
pub mod render;
pub mod runner;
pub mod sample;
