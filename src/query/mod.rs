//! Query planning and result iteration.

pub mod cursor;
pub mod planner;

pub use cursor::TripleCursor;
pub use planner::{plan, Probe, QueryPlan, Residual};
