//! Site navigation state.
//!
//! Models the mobile menu toggle and the keyboard-focus indicator shared by
//! every page. Bindings forward events to [`NavigationState::handle`] and
//! render the derived attributes.

use crate::announce::Announcement;
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Keys the navigation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Closes an open menu
    Escape,
    /// Turns on focus indicators
    Tab,
    /// Anything else
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// A user interaction relevant to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// The menu toggle button was clicked
    ToggleClicked,
    /// A link inside the menu was clicked
    LinkClicked,
    /// A click landed outside both the toggle and the menu
    OutsideClicked,
    /// A key was pressed anywhere in the document
    KeyDown(Key),
    /// A mouse button was pressed anywhere in the document
    MouseDown,
    /// The viewport was resized to the given width in pixels
    Resized(u32),
}

/// Side effects a binding must perform after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavEffects {
    /// Move focus back to the menu toggle
    pub focus_toggle: bool,
}

/// Menu and focus-indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    menu_open: bool,
    keyboard_navigation: bool,
    breakpoint_px: u32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl NavigationState {
    /// Closed menu, mouse navigation.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            menu_open: false,
            keyboard_navigation: false,
            breakpoint_px: config.nav_breakpoint_px,
        }
    }

    /// Whether the menu has the `active` class.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the body has the `keyboard-navigation` class.
    pub fn keyboard_navigation(&self) -> bool {
        self.keyboard_navigation
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    /// Whether page scrolling is disabled behind the open menu.
    pub fn body_scroll_locked(&self) -> bool {
        self.menu_open
    }

    /// Applies `event` and reports the side effects to perform.
    pub fn handle(&mut self, event: NavEvent) -> NavEffects {
        let mut effects = NavEffects::default();
        match event {
            NavEvent::ToggleClicked => self.menu_open = !self.menu_open,
            NavEvent::LinkClicked | NavEvent::OutsideClicked => self.menu_open = false,
            NavEvent::KeyDown(Key::Escape) => {
                if self.menu_open {
                    self.menu_open = false;
                    effects.focus_toggle = true;
                }
            }
            NavEvent::KeyDown(Key::Tab) => self.keyboard_navigation = true,
            NavEvent::KeyDown(Key::Other) => {}
            NavEvent::MouseDown => self.keyboard_navigation = false,
            NavEvent::Resized(width) => {
                if width > self.breakpoint_px {
                    self.menu_open = false;
                }
            }
        }
        tracing::trace!(?event, menu_open = self.menu_open, "Navigation event");
        effects
    }
}

/// Announcement made once a page has loaded, if it has a title.
pub fn page_loaded_announcement(title: Option<&str>, ttl: Duration) -> Option<Announcement> {
    title
        .filter(|t| !t.trim().is_empty())
        .map(|t| Announcement::page_loaded(t, ttl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut nav = NavigationState::default();
        nav.handle(NavEvent::ToggleClicked);
        assert!(nav.menu_open());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(nav.body_scroll_locked());

        nav.handle(NavEvent::ToggleClicked);
        assert!(!nav.menu_open());
        assert_eq!(nav.aria_expanded(), "false");
        assert!(!nav.body_scroll_locked());
    }

    #[test]
    fn test_link_and_outside_clicks_close() {
        let mut nav = NavigationState::default();
        for event in [NavEvent::LinkClicked, NavEvent::OutsideClicked] {
            nav.handle(NavEvent::ToggleClicked);
            nav.handle(event);
            assert!(!nav.menu_open());
        }
    }

    #[test]
    fn test_escape_refocuses_toggle_only_when_open() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.handle(NavEvent::KeyDown(Key::Escape)), NavEffects::default());

        nav.handle(NavEvent::ToggleClicked);
        let effects = nav.handle(NavEvent::KeyDown(Key::from_dom("Escape")));
        assert!(effects.focus_toggle);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_resize_closes_above_breakpoint() {
        let mut nav = NavigationState::default();
        nav.handle(NavEvent::ToggleClicked);
        nav.handle(NavEvent::Resized(768));
        assert!(nav.menu_open());
        nav.handle(NavEvent::Resized(769));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_keyboard_navigation_indicator() {
        let mut nav = NavigationState::default();
        nav.handle(NavEvent::KeyDown(Key::Tab));
        assert!(nav.keyboard_navigation());
        nav.handle(NavEvent::MouseDown);
        assert!(!nav.keyboard_navigation());
    }

    #[test]
    fn test_page_loaded_announcement() {
        let ttl = Duration::from_secs(1);
        assert_eq!(
            page_loaded_announcement(Some("Book an Appointment"), ttl)
                .unwrap()
                .text,
            "Page loaded: Book an Appointment"
        );
        assert!(page_loaded_announcement(None, ttl).is_none());
        assert!(page_loaded_announcement(Some("  "), ttl).is_none());
    }
}
