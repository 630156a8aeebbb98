//! Shared DTOs (schemas-as-code) for the pomfix workspace.
//!
//! # Design constraints
//! - `project` mirrors the descriptor shape handed over by the external
//!   POM parser; optional sections stay `Option` so "absent" is
//!   distinguishable from "present but empty".
//! - `patch` is the configuration wire shape; be conservative with
//!   breaking changes.

pub mod outcome;
pub mod patch;
pub mod project;
