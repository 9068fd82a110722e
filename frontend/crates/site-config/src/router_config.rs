use crate::DEFAULT_SMOOTH_FRAGMENT_SCROLL;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Animate scrolling to in-page anchors instead of jumping
    pub smooth_fragment_scroll: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            smooth_fragment_scroll: DEFAULT_SMOOTH_FRAGMENT_SCROLL,
        }
    }
}
