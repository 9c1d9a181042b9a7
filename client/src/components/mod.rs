//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state through the `AppContext` provided
//! by `App`.

pub mod field_error;
pub mod guarded;
pub mod stat_card;
pub mod toast;
pub mod top_bar;
