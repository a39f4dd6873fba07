//! Scroll progress indicator.
//!
//! Width of the bar is the scrolled fraction of the scrollable height, in
//! percent. A page that cannot scroll reports 0%.

use spark_signals::{signal, Signal};

/// Scroll position and document geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `window.scrollY`
    pub scroll_y: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Viewport height.
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_y,
            scroll_height,
            client_height,
        }
    }
}

/// Scrolled percentage, clamped to `0.0..=100.0`.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.scroll_y.is_finite() {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Reactive progress bar state.
pub struct ScrollProgress {
    width: Signal<f64>,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self { width: signal(0.0) }
    }

    /// Recompute the width for a scroll event.
    pub fn on_scroll(&self, metrics: ScrollMetrics) -> f64 {
        let pct = scroll_progress(metrics);
        if self.width.get() != pct {
            self.width.set(pct);
        }
        pct
    }

    pub fn percent(&self) -> f64 {
        self.width.get()
    }

    pub fn width_signal(&self) -> Signal<f64> {
        self.width.clone()
    }

    /// CSS width value, e.g. `"42.5%"`.
    pub fn width_style(&self) -> String {
        format!("{}%", self.percent())
    }
}
