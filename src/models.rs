//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by process domain. Gas absorption equipment lives in
//! [`absorption`].
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule, which is not part of the public API. The
//! public module re-exports the input, configuration, and result types and
//! provides a thin [`twine_core::Model`] adapter over the core solver.

pub mod absorption;
