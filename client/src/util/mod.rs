//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component code to improve reuse and testability.

pub mod dark_mode;
pub mod forms;
pub mod guard;
pub mod storage;
