//! Global keyboard dispatch.
//!
//! `App` installs a single window `keydown` listener and routes every key
//! through [`key_action`]. The table is priority-ordered: the topmost open
//! surface consumes the key, so Escape in the lightbox never also closes the
//! memory modal or the menu underneath it.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Which overlay surfaces are currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSurfaces {
    pub lightbox: bool,
    pub modal: bool,
    pub menu: bool,
}

/// Action a key press resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseLightbox,
    /// Move the lightbox cursor by the given delta.
    StepLightbox(i32),
    CloseModal,
    CloseMenu,
}

/// Resolve `key` (a `KeyboardEvent.key` value) against the open surfaces.
#[must_use]
pub fn key_action(key: &str, open: OpenSurfaces) -> Option<KeyAction> {
    if open.lightbox {
        return match key {
            "Escape" => Some(KeyAction::CloseLightbox),
            "ArrowLeft" => Some(KeyAction::StepLightbox(-1)),
            "ArrowRight" => Some(KeyAction::StepLightbox(1)),
            _ => None,
        };
    }
    if key != "Escape" {
        return None;
    }
    if open.modal {
        Some(KeyAction::CloseModal)
    } else if open.menu {
        Some(KeyAction::CloseMenu)
    } else {
        None
    }
}
