//! Thin presentation layer over the tracker core.

pub mod args;
pub mod commands;
