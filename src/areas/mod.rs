//! Process-level collaborators
//!
//! This module contains the pieces a single invocation is built from:
//!
//! - `session`: owns the output writer and styling for one run
//! - `workspace`: file access rooted at the working directory

pub mod session;
pub mod workspace;
