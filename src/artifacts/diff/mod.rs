//! Line comparison
//!
//! This module implements the positional diff behind the compare flow:
//! lines are matched solely by shared index, and consecutive differing
//! indices are grouped into a single changed block.
//!
//! No realignment is attempted after an insertion or deletion, so one
//! inserted line shifts every following pair out of step and is reported
//! as a whole-file changed block. This is a known limitation, preserved
//! on purpose.

pub mod positional_diff;
