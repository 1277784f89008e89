//! Command implementations for the xdt-apply CLI

pub mod apply;
pub mod check;
pub mod classify;
pub mod completions;
pub mod version;
