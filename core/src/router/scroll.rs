//! Scroll positions and the scroll behavior hook
//!
//! Every navigation asks a [`ScrollBehavior`] where the page should land.
//! The default restores the offset saved for the entry being entered and
//! otherwise scrolls to the top.

use std::fmt;

/// Scroll offset of the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    /// Top-left corner of the page
    pub const TOP: Self = Self { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// A vertical offset with no horizontal scroll
    pub fn vertical(top: f64) -> Self {
        Self { left: 0.0, top }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left == 0.0 {
            write!(f, "top={}", self.top)
        } else {
            write!(f, "left={} top={}", self.left, self.top)
        }
    }
}

/// One side of a navigation, as seen by a scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPoint<'a> {
    /// Normalized logical path
    pub path: &'a str,
    /// Name of the matched route, if it has one
    pub name: Option<&'a str>,
}

/// Decides the scroll target of a navigation
pub trait ScrollBehavior: Send + Sync {
    /// `saved` is the position recorded for the history entry being entered,
    /// if that entry was visited before and its offset was saved.
    fn scroll_target(
        &self,
        to: NavigationPoint<'_>,
        from: Option<NavigationPoint<'_>>,
        saved: Option<ScrollPosition>,
    ) -> ScrollPosition;
}

/// Restore the saved position, or scroll to the top
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreOrTop;

impl ScrollBehavior for RestoreOrTop {
    fn scroll_target(
        &self,
        _to: NavigationPoint<'_>,
        _from: Option<NavigationPoint<'_>>,
        saved: Option<ScrollPosition>,
    ) -> ScrollPosition {
        saved.unwrap_or(ScrollPosition::TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(path: &str) -> NavigationPoint<'_> {
        NavigationPoint { path, name: None }
    }

    #[test]
    fn test_saved_position_is_restored_exactly() {
        let saved = ScrollPosition::new(12.5, 400.0);
        let target = RestoreOrTop.scroll_target(point("/admin"), Some(point("/")), Some(saved));
        assert_eq!(target, saved);
    }

    #[test]
    fn test_without_saved_position_scrolls_to_top() {
        let target = RestoreOrTop.scroll_target(point("/admin"), Some(point("/")), None);
        assert_eq!(target, ScrollPosition::TOP);

        let initial = RestoreOrTop.scroll_target(point("/"), None, None);
        assert_eq!(initial, ScrollPosition::TOP);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScrollPosition::vertical(400.0).to_string(), "top=400");
        assert_eq!(ScrollPosition::new(8.0, 0.0).to_string(), "left=8 top=0");
    }
}
