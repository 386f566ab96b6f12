//! Game implementations.

pub mod gobang;
