//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and persistence so route handlers
//! can stay focused on protocol translation and auth plumbing.

pub mod account;
pub mod session;
