//! Networking modules for the weather-platform REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` prepares and sends requests, `error` classifies failures into a
//! typed channel, `api` holds the concrete calls, and `types` defines the
//! wire bodies.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
