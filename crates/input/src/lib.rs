//! Key bindings for the level viewer.
//!
//! # Invariants
//! - Consumers see [`Action`]s, never raw key events.
//! - Unbound keys map to [`Action::Noop`].

pub mod action;

pub use action::Action;

/// Returns crate version info.
pub fn crate_info() -> &'static str {
    "pathforge-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("pathforge-input"));
    }
}
