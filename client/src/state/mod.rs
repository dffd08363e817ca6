//! Per-controller client-side state.
//!
//! DESIGN
//! ======
//! Each controller (navigation, catalog, gallery, contact form) owns one plain
//! struct. `App` wraps each in an `RwSignal` and provides it through context,
//! so handlers mutate explicit state instead of page-level globals. The
//! structs hold no Leptos types and are tested natively.

pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod nav;
