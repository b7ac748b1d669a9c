//! Scroll-driven navbar state.
//!
//! Two independent axes: the bar turns opaque past a small scroll offset, and
//! it hides once the hero banner has scrolled fully out of view.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    ShownTransparent,
    ShownOpaque,
    Hidden,
}

impl NavbarState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavbarState::ShownTransparent => "shown-transparent",
            NavbarState::ShownOpaque => "shown-opaque",
            NavbarState::Hidden => "hidden",
        }
    }

    pub fn is_shown(&self) -> bool {
        !matches!(self, NavbarState::Hidden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarVisibility {
    pub is_past_scroll_threshold: bool,
    pub is_within_hero_bounds: bool,
}

impl Default for NavbarVisibility {
    fn default() -> Self {
        Self {
            is_past_scroll_threshold: false,
            is_within_hero_bounds: true,
        }
    }
}

impl NavbarVisibility {
    /// `hero_bottom` is the hero banner's bottom edge in document
    /// coordinates; `None` when the hero cannot be found.
    pub fn evaluate(scroll_y: f64, hero_bottom: Option<f64>) -> Self {
        Self {
            is_past_scroll_threshold: scroll_y > NAVBAR_OPAQUE_THRESHOLD_PX,
            is_within_hero_bounds: hero_bottom
                .map(|bottom| scroll_y <= bottom + HERO_HIDE_BUFFER_PX)
                .unwrap_or(true),
        }
    }

    pub fn state(&self) -> NavbarState {
        match (self.is_within_hero_bounds, self.is_past_scroll_threshold) {
            (false, _) => NavbarState::Hidden,
            (true, true) => NavbarState::ShownOpaque,
            (true, false) => NavbarState::ShownTransparent,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarTracker {
    last_evaluated_y: Option<f64>,
    visibility: NavbarVisibility,
}

impl NavbarTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavbarState {
        self.visibility.state()
    }

    pub fn visibility(&self) -> NavbarVisibility {
        self.visibility
    }

    /// Feeds a scroll position. The opacity axis is always recomputed; the
    /// hero measurement (`hero_bottom`) only runs once the delta since the
    /// last full evaluation reaches the noise threshold. Below it, returns
    /// `Some` only if the opacity change altered the state.
    pub fn on_scroll<H>(&mut self, scroll_y: f64, hero_bottom: H) -> Option<NavbarState>
    where
        H: FnOnce() -> Option<f64>,
    {
        if let Some(last) = self.last_evaluated_y {
            if (scroll_y - last).abs() < SCROLL_NOISE_PX {
                let before = self.visibility.state();
                self.visibility.is_past_scroll_threshold = scroll_y > NAVBAR_OPAQUE_THRESHOLD_PX;
                let after = self.visibility.state();
                return (after != before).then_some(after);
            }
        }
        self.last_evaluated_y = Some(scroll_y);
        self.visibility = NavbarVisibility::evaluate(scroll_y, hero_bottom());
        Some(self.visibility.state())
    }
}

/// Open/closed state of the compact (mobile) menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
