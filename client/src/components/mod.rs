//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component binds one controller's state (from Leptos context) to its
//! piece of the page. Components own markup and event wiring only; the rules
//! live in `state` and `util`.

pub mod contact_form;
pub mod faq;
pub mod gallery;
pub mod lightbox;
pub mod memory_card;
pub mod memory_filters;
pub mod memory_list;
pub mod memory_modal;
pub mod nav_menu;
