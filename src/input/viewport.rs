//! Screen to logical coordinate conversion.

use crate::config::ViewportConfig;
use crate::draw::Point;

/// Maps device/screen positions into the canvas's logical space.
pub trait CoordinateTransformer {
    fn to_logical(&self, screen: Point) -> Point;
}

/// Pan/zoom state of the canvas.
///
/// `logical = (screen - origin) / zoom + scroll`, where `origin` is the
/// screen position of the canvas container and `scroll` the logical point
/// shown at that corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Point,
    scroll: Point,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            scroll: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Identity viewport (no offset, zoom 1.0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a viewport from validated configuration.
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::default()
            .with_origin(Point::new(config.origin_x, config.origin_y))
            .with_scroll(Point::new(config.scroll_x, config.scroll_y))
            .with_zoom(config.zoom)
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }

    /// Sets the zoom factor. Non-positive or non-finite values are ignored.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        } else {
            log::warn!("Ignoring invalid zoom {zoom}, keeping {}", self.zoom);
        }
        self
    }

    /// Inverse of [`CoordinateTransformer::to_logical`].
    pub fn to_screen(&self, logical: Point) -> Point {
        Point::new(
            (logical.x - self.scroll.x) * self.zoom + self.origin.x,
            (logical.y - self.scroll.y) * self.zoom + self.origin.y,
        )
    }
}

impl CoordinateTransformer for Viewport {
    fn to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x) / self.zoom + self.scroll.x,
            (screen.y - self.origin.y) / self.zoom + self.scroll.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_viewport_passes_points_through() {
        let viewport = Viewport::new();
        let screen = Point::new(12.5, -3.0);
        assert_eq!(viewport.to_logical(screen), screen);
    }

    #[test]
    fn origin_zoom_and_scroll_are_applied() {
        let viewport = Viewport::new()
            .with_origin(Point::new(100.0, 50.0))
            .with_scroll(Point::new(10.0, 20.0))
            .with_zoom(2.0);

        let logical = viewport.to_logical(Point::new(140.0, 90.0));
        assert_eq!(logical, Point::new(30.0, 40.0));
        assert_eq!(viewport.to_screen(logical), Point::new(140.0, 90.0));
    }

    #[test]
    fn invalid_zoom_is_ignored() {
        let viewport = Viewport::new().with_zoom(0.0).with_zoom(f64::NAN);
        assert_eq!(viewport, Viewport::new());
    }
}
