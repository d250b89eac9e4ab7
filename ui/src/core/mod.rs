//! Platform-agnostic helpers shared by the views.

pub mod format;
