//! Supporting utilities shared by the models.
//!
//! - [`constraint`]: Typed wrappers that enforce numeric invariants on
//!   process inputs.
//! - [`units`]: Small extensions to [`uom`] quantities.

pub mod constraint;
pub mod units;
