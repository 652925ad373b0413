// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter popup visibility.

/// Whether the popup overlay is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `display: none`.
    #[default]
    Hidden,
    /// `display: flex`.
    Shown,
}

impl Visibility {
    /// Returns the CSS `display` value for this visibility.
    #[must_use]
    pub const fn css_display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown => "flex",
        }
    }
}

/// Visibility state of the newsletter popup.
///
/// All transitions are idempotent: opening an open popup or closing a closed
/// one leaves it unchanged, but the returned visibility is still written so
/// the DOM converges even if markup started in a different state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Popup {
    visibility: Visibility,
}

impl Popup {
    /// Creates a hidden popup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
        }
    }

    /// Returns the current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Shows the popup.
    pub fn open(&mut self) -> Visibility {
        self.visibility = Visibility::Shown;
        self.visibility
    }

    /// Hides the popup.
    pub fn close(&mut self) -> Visibility {
        self.visibility = Visibility::Hidden;
        self.visibility
    }

    /// Handles a click that reached the popup container.
    ///
    /// Only clicks whose target is the backdrop itself close the popup;
    /// clicks on its content bubble up with a different target and are
    /// ignored. Returns the new visibility if the click closed the popup.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) -> Option<Visibility> {
        target_is_backdrop.then(|| self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close() {
        let mut popup = Popup::new();
        assert_eq!(popup.open().css_display(), "flex");
        assert_eq!(popup.close().css_display(), "none");
        assert_eq!(popup.visibility(), Visibility::Hidden);
    }

    #[test]
    fn content_clicks_do_not_close() {
        let mut popup = Popup::new();
        popup.open();
        assert_eq!(popup.backdrop_click(false), None);
        assert_eq!(popup.visibility(), Visibility::Shown);
        assert_eq!(popup.backdrop_click(true), Some(Visibility::Hidden));
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut popup = Popup::new();
        popup.open();
        popup.open();
        assert_eq!(popup.visibility(), Visibility::Shown);
        popup.close();
        popup.close();
        assert_eq!(popup.visibility(), Visibility::Hidden);
    }
}
