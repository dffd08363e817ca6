//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the static memory collection and owns the (simulated)
//! contact-form transport boundary.

pub mod api;
