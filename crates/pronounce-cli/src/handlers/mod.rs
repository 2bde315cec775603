//! Command handlers.

pub mod save;
pub mod say;
pub mod voices;
