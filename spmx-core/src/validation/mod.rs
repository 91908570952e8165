//! Validation utilities for the sparse matrix core
//!
//! This module contains pure validation functions with no I/O dependencies:
//! coordinate and shape checks, and field-level parsing of the text format.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_index, check_inner_dimensions, check_same_shape, check_signed_index};
pub use parsing::{parse_dimension, parse_entry, parse_integer};
