//! Various utility functions.

pub mod angles;
