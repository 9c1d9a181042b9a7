//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page but `landing` is mounted behind `Guarded`.

pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod not_found;
