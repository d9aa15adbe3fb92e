// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Names shared with the markup and stylesheet layers.

/// Candidate selector and marker class.
///
/// Markup applies the class named by `selector` to elements that should
/// reveal; a stylesheet defines the transition keyed on `marker_class`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    /// CSS selector identifying candidate elements.
    pub selector: &'static str,
    /// Class added to a candidate once it has been fully in view.
    pub marker_class: &'static str,
}

impl RevealConfig {
    /// Selector used by [`RevealConfig::DEFAULT`].
    pub const DEFAULT_SELECTOR: &'static str = ".info__content";

    /// Marker class used by [`RevealConfig::DEFAULT`].
    pub const DEFAULT_MARKER_CLASS: &'static str = "visible";

    /// `.info__content` candidates, marked with `visible`.
    pub const DEFAULT: Self = Self {
        selector: Self::DEFAULT_SELECTOR,
        marker_class: Self::DEFAULT_MARKER_CLASS,
    };

    /// Creates a configuration with custom names.
    #[must_use]
    pub const fn new(selector: &'static str, marker_class: &'static str) -> Self {
        Self {
            selector,
            marker_class,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stylesheet_contract() {
        let cfg = RevealConfig::default();
        assert_eq!(cfg.selector, ".info__content");
        assert_eq!(cfg.marker_class, "visible");
    }

    #[test]
    fn custom_names() {
        let cfg = RevealConfig::new("[data-reveal]", "shown");
        assert_eq!(cfg.selector, "[data-reveal]");
        assert_eq!(cfg.marker_class, "shown");
        assert_ne!(cfg, RevealConfig::DEFAULT);
    }
}
