//! Domain utility functions

pub mod timestamp;
