//! Gas absorption models.
//!
//! This module contains models for equipment that transfers a soluble gas
//! into a liquid, such as falling-film absorbers.

pub mod falling_film;
