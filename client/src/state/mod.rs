//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the pure store logic, `notice` the toast queue, and
//! `context` wraps both in signals for the component tree.

pub mod context;
pub mod notice;
pub mod session;
