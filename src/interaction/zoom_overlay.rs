use serde::{Deserialize, Serialize};

use crate::core::{ChartId, ScaleExtent, ViewTransform};
use crate::error::{ChartError, ChartResult};

/// Origin of a zoom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomEventSource {
    /// Wheel or drag input on the overlay.
    Gesture,
    /// Raised by assigning the overlay transform from code.
    Programmatic,
}

/// Transform change reported by a chart's zoom overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomEvent {
    pub chart: ChartId,
    pub transform: ViewTransform,
    pub source: ZoomEventSource,
}

/// Zoom-capture surface covering one chart's plot area.
///
/// Holds the transform that gestures continue from. Wheel input zooms around
/// the pointer, drag input pans; both are constrained to the scale extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOverlay {
    chart: ChartId,
    width: f64,
    height: f64,
    transform: ViewTransform,
    extent: ScaleExtent,
    wheel_sensitivity: f64,
    drag_anchor: Option<(f64, f64)>,
}

impl ZoomOverlay {
    pub fn new(
        chart: ChartId,
        width: f64,
        height: f64,
        extent: ScaleExtent,
        wheel_sensitivity: f64,
    ) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom overlay size must be finite and > 0".to_owned(),
            ));
        }
        if !wheel_sensitivity.is_finite() || wheel_sensitivity <= 0.0 {
            return Err(ChartError::InvalidData(
                "wheel sensitivity must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            chart,
            width,
            height,
            transform: ViewTransform::IDENTITY,
            extent: extent.validate()?,
            wheel_sensitivity,
            drag_anchor: None,
        })
    }

    #[must_use]
    pub fn chart(&self) -> ChartId {
        self.chart
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Returns `true` when the pointer lies inside the overlay.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
    }

    /// Assigns the transform from code and reports the resulting event.
    ///
    /// Listeners see this like any other zoom event; callers that assign
    /// transforms while handling a zoom must ignore it.
    pub fn set_transform(&mut self, transform: ViewTransform) -> ChartResult<ZoomEvent> {
        if !transform.is_finite() {
            return Err(ChartError::InvalidData(
                "overlay transform must be finite with k > 0".to_owned(),
            ));
        }
        self.transform = transform;
        Ok(self.event(ZoomEventSource::Programmatic))
    }

    /// Zooms by `2^(-delta * sensitivity)` keeping the point under `(px, py)` fixed.
    ///
    /// Returns `None` when the zoom factor is already at the extent bound.
    pub fn wheel(&mut self, px: f64, py: f64, delta: f64) -> ChartResult<Option<ZoomEvent>> {
        if !px.is_finite() || !py.is_finite() || !delta.is_finite() {
            return Err(ChartError::InvalidData(
                "wheel position and delta must be finite".to_owned(),
            ));
        }
        let current = self.transform;
        let k = self
            .extent
            .clamp(current.k * 2f64.powf(-delta * self.wheel_sensitivity));
        if k == current.k {
            return Ok(None);
        }

        let anchor_x = current.invert_x(px);
        let anchor_y = current.invert_y(py);
        self.transform = ViewTransform::new(px - anchor_x * k, py - anchor_y * k, k);
        Ok(Some(self.event(ZoomEventSource::Gesture)))
    }

    pub fn drag_start(&mut self, px: f64, py: f64) -> ChartResult<()> {
        if !px.is_finite() || !py.is_finite() {
            return Err(ChartError::InvalidData(
                "drag position must be finite".to_owned(),
            ));
        }
        self.drag_anchor = Some((self.transform.invert_x(px), self.transform.invert_y(py)));
        Ok(())
    }

    /// Pans so that the point grabbed at drag start follows the pointer.
    ///
    /// Returns `None` outside a drag or when the transform does not change.
    pub fn drag_move(&mut self, px: f64, py: f64) -> ChartResult<Option<ZoomEvent>> {
        if !px.is_finite() || !py.is_finite() {
            return Err(ChartError::InvalidData(
                "drag position must be finite".to_owned(),
            ));
        }
        let Some((anchor_x, anchor_y)) = self.drag_anchor else {
            return Ok(None);
        };
        let k = self.transform.k;
        let next = ViewTransform::new(px - anchor_x * k, py - anchor_y * k, k);
        if next == self.transform {
            return Ok(None);
        }
        self.transform = next;
        Ok(Some(self.event(ZoomEventSource::Gesture)))
    }

    pub fn drag_end(&mut self) {
        self.drag_anchor = None;
    }

    fn event(&self, source: ZoomEventSource) -> ZoomEvent {
        ZoomEvent {
            chart: self.chart,
            transform: self.transform,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoomEventSource, ZoomOverlay};
    use crate::core::{ChartId, ScaleExtent, ViewTransform};

    fn overlay() -> ZoomOverlay {
        ZoomOverlay::new(ChartId::Function, 630.0, 250.0, ScaleExtent::default(), 0.002)
            .expect("overlay")
    }

    #[test]
    fn wheel_keeps_pointer_anchor_fixed() {
        let mut overlay = overlay();
        let event = overlay
            .wheel(200.0, 100.0, -500.0)
            .expect("wheel")
            .expect("zoom changed");
        assert_eq!(event.source, ZoomEventSource::Gesture);
        let t = event.transform;
        assert!((t.k - 2.0).abs() <= 1e-12);
        assert!((t.apply_x(200.0) - 200.0).abs() <= 1e-9);
        assert!((t.apply_y(100.0) - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn wheel_stops_at_extent_bound() {
        let mut overlay = overlay();
        overlay
            .set_transform(ViewTransform::new(0.0, 0.0, 10.0))
            .expect("assign");
        let event = overlay.wheel(10.0, 10.0, -500.0).expect("wheel");
        assert!(event.is_none());
    }

    #[test]
    fn drag_pans_by_pointer_delta() {
        let mut overlay = overlay();
        overlay.drag_start(100.0, 100.0).expect("start");
        let event = overlay
            .drag_move(130.0, 90.0)
            .expect("move")
            .expect("changed");
        assert_eq!(event.transform, ViewTransform::new(30.0, -10.0, 1.0));
        overlay.drag_end();
        assert!(overlay.drag_move(0.0, 0.0).expect("move").is_none());
    }
}
