use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::view::ScrollSurface;

/// Shows the back-to-top control once the page is scrolled past
/// `threshold`. Without a surface every call does nothing.
pub struct ScrollToTop {
    surface: Option<Arc<dyn ScrollSurface>>,
    threshold: f64,
    visible: AtomicBool,
}

impl ScrollToTop {
    pub fn new(surface: Option<Arc<dyn ScrollSurface>>, threshold: f64) -> Self {
        Self {
            surface,
            threshold,
            visible: AtomicBool::new(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    pub fn on_scroll(&self, offset: f64) -> bool {
        let Some(surface) = &self.surface else {
            return false;
        };

        let visible = offset > self.threshold;
        self.visible.store(visible, Ordering::Relaxed);
        surface.set_control_visible(visible);
        visible
    }

    pub fn on_activate(&self) {
        if let Some(surface) = &self.surface {
            surface.smooth_scroll_to(0.0);
        }
    }
}
