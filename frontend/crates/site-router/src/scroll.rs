use crate::{Location, NavigationTrigger};

use serde::Serialize;

/// Viewport offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScrollPosition {
    pub left: u32,
    pub top: u32,
}

impl ScrollPosition {
    pub const fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Jump straight to the target
    Auto,
    Smooth,
}

/// Where the viewport ends up after a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    /// Offset recorded against the history entry being revisited
    Saved(ScrollPosition),
    /// The element whose id is the location's fragment
    Element {
        selector: String,
        behavior: ScrollBehavior,
    },
    Top,
}

/// Decides scrolling for every completed navigation.
///
/// Strict priority: a saved position on back/forward, then the fragment's
/// element, then the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPolicy {
    fragment_behavior: ScrollBehavior,
}

impl ScrollPolicy {
    pub const fn new(fragment_behavior: ScrollBehavior) -> Self {
        Self { fragment_behavior }
    }

    pub fn fragment_behavior(&self) -> ScrollBehavior {
        self.fragment_behavior
    }

    /// `saved` is ignored unless the navigation is a history traversal.
    pub fn target(
        &self,
        to: &Location,
        trigger: NavigationTrigger,
        saved: Option<ScrollPosition>,
    ) -> ScrollTarget {
        if let (NavigationTrigger::Traverse, Some(position)) = (trigger, saved) {
            return ScrollTarget::Saved(position);
        }

        if let Some(fragment) = to.fragment() {
            return ScrollTarget::Element {
                selector: format!("#{fragment}"),
                behavior: self.fragment_behavior,
            };
        }

        ScrollTarget::Top
    }
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self::new(ScrollBehavior::Smooth)
    }
}
