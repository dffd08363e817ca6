//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and key-dispatch logic lives here so components stay thin
//! and the rules can be tested without a browser.

pub mod clock;
pub mod format;
pub mod keys;
