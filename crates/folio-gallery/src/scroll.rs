//! Wheel routing for the modal's scrollable body.
//!
//! While the modal is open and the pointer is over its body, wheel input
//! scrolls the body and must not reach the page behind it. Once the body is
//! already at its boundary in the gesture's direction the event is handed
//! back to the page.

/// Distance from an edge, in CSS pixels, that still counts as at the edge.
///
/// Zoomed pages report fractional offsets and may never reach the exact
/// boundary value.
pub const BOUNDARY_TOLERANCE: f64 = 1.0;

/// Scroll position of a container, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top (`scrollTop`).
    pub offset: f64,
    /// Visible height (`clientHeight`).
    pub viewport: f64,
    /// Total scrollable height (`scrollHeight`).
    pub extent: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport: f64, extent: f64) -> Self {
        Self {
            offset,
            viewport,
            extent,
        }
    }

    pub fn at_top(&self) -> bool {
        self.offset < BOUNDARY_TOLERANCE
    }

    pub fn at_bottom(&self) -> bool {
        self.extent - (self.offset + self.viewport) < BOUNDARY_TOLERANCE
    }
}

/// A wheel event as seen by the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelEvent {
    /// Vertical delta; positive scrolls down.
    pub delta_y: f64,
    /// Whether the pointer is over the modal's scrollable body.
    pub over_region: bool,
}

impl WheelEvent {
    pub fn over_region(delta_y: f64) -> Self {
        Self {
            delta_y,
            over_region: true,
        }
    }

    pub fn outside_region(delta_y: f64) -> Self {
        Self {
            delta_y,
            over_region: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelRoute {
    /// Consume the event; the region scrolls and the page does not.
    Intercept,
    /// Let the event reach the page.
    PassThrough,
}

impl WheelRoute {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, WheelRoute::Intercept)
    }
}

/// Decide whether a wheel event is kept by the modal region.
pub fn route_wheel(modal_open: bool, event: &WheelEvent, metrics: &ScrollMetrics) -> WheelRoute {
    if !modal_open || !event.over_region {
        return WheelRoute::PassThrough;
    }
    let at_boundary = if event.delta_y < 0.0 {
        metrics.at_top()
    } else if event.delta_y > 0.0 {
        metrics.at_bottom()
    } else {
        true
    };
    if at_boundary {
        WheelRoute::PassThrough
    } else {
        WheelRoute::Intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscrollable_region_passes_both_ways() {
        let metrics = ScrollMetrics::new(0.0, 400.0, 300.0);
        assert!(metrics.at_top() && metrics.at_bottom());
        assert_eq!(
            route_wheel(true, &WheelEvent::over_region(10.0), &metrics),
            WheelRoute::PassThrough
        );
    }
}
