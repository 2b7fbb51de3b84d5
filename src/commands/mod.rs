//! Command implementations
//!
//! Each command is an `impl Session` block: it receives its arguments,
//! drives the domain logic, and writes its report through the session
//! writer.

pub mod diff;
pub mod usage;
