//! Ladder Kernel: the data-structure core of the word-ladder workspace.
//!
//! # API Surface
//!
//! - [`tree::PriorityTree`] -- AVL-balanced ordered container that doubles as
//!   a min-priority queue (insert, `delete_min`, remove, rotations)
//! - [`dictionary::WordDictionary`] -- length-partitioned, deduplicated word set
//! - [`cost`] -- mismatch count (Hamming distance), adjacency, combined priority
//! - [`digest`] -- domain-separated SHA-256 digests over sorted-key JSON
//!
//! # Module Dependency Direction
//!
//! `tree` and `cost` depend on nothing internal. `dictionary` depends on
//! `cost` for character-length rules. `digest` is standalone.
//!
//! The kernel performs no I/O and holds no search policy.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod dictionary;
pub mod digest;
pub mod tree;
