//! Sorters that rearrange the caller's slice and return nothing.

pub mod bogo;
pub mod bubble;
pub mod insertion;
pub mod selection;
