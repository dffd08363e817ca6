//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` owns page-level orchestration (the data
//! fetch) and delegates rendering details to `components`.

pub mod home;
