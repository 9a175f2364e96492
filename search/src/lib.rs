//! Ladder Search: uninformed and informed word-ladder search.
//!
//! This crate provides the search layer. It depends only on `ladder_kernel`;
//! it does NOT depend on `ladder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_kernel  ←  ladder_search  ←  ladder_harness
//! (tree, words)     (states, engine)   (loading, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`LadderState`]: immutable partial ladder with its frontier priority
//! - [`Frontier`]: FIFO ([`FifoFrontier`]) or priority-tree
//!   ([`PriorityFrontier`]) container of unexpanded states
//! - [`SearchPolicy`]: mode, expansion budget, audit-log switch
//! - [`LadderScorer`]: remaining-cost estimate for informed mode
//! - [`SearchReport`]: outcome, counters and optional expansion log
//!
//! [`LadderState`]: node::LadderState
//! [`Frontier`]: frontier::Frontier
//! [`FifoFrontier`]: frontier::FifoFrontier
//! [`PriorityFrontier`]: frontier::PriorityFrontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`LadderScorer`]: scorer::LadderScorer
//! [`SearchReport`]: report::SearchReport

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod scorer;
pub mod search;
