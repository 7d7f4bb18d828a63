//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the login surfaces; the page owns state and passes
//! signals and callbacks down.

pub mod credential_form;
pub mod notice_banner;
pub mod role_selector;
