//! Element storage for the canvas surface.

use super::bounds::{Bounds, Point};
use super::element::{BrushElement, ElementId, StrokeStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by an [`ElementStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("element {0} does not exist")]
    UnknownElement(ElementId),
}

/// Authoritative owner of drawable elements.
///
/// Stroke capture only creates and reshapes elements; how they are persisted
/// or shared is up to the implementation.
pub trait ElementStore {
    /// Adds a new brush element and returns its identifier.
    fn create(&mut self, bounds: Bounds, points: Vec<Point>, style: StrokeStyle) -> ElementId;

    /// Replaces the geometry of an existing brush element.
    fn update(
        &mut self,
        id: ElementId,
        bounds: Bounds,
        points: Vec<Point>,
    ) -> Result<(), StoreError>;

    /// Looks up an element by identifier.
    fn get(&self, id: ElementId) -> Option<&BrushElement>;
}

/// In-memory element store.
///
/// Keeps elements in draw order (first = bottom layer, last = top layer).
/// Identifiers are allocated monotonically and never reused, even after
/// removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Surface {
    elements: Vec<BrushElement>,
    next_id: u64,
}

impl Surface {
    /// Creates a new empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All elements in draw order.
    pub fn elements(&self) -> &[BrushElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes and returns the element with the given id.
    pub fn remove(&mut self, id: ElementId) -> Option<BrushElement> {
        let index = self.elements.iter().position(|element| element.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Removes all elements. Identifiers are not recycled.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut BrushElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }
}

impl ElementStore for Surface {
    fn create(&mut self, bounds: Bounds, points: Vec<Point>, style: StrokeStyle) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.elements.push(BrushElement {
            id,
            bounds,
            points,
            style,
        });
        log::debug!(
            "Created brush element {id} at ({:.1}, {:.1})",
            bounds.x,
            bounds.y
        );
        id
    }

    fn update(
        &mut self,
        id: ElementId,
        bounds: Bounds,
        points: Vec<Point>,
    ) -> Result<(), StoreError> {
        let element = self.get_mut(id).ok_or(StoreError::UnknownElement(id))?;
        element.bounds = bounds;
        element.points = points;
        Ok(())
    }

    fn get(&self, id: ElementId) -> Option<&BrushElement> {
        self.elements.iter().find(|element| element.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn style() -> StrokeStyle {
        StrokeStyle {
            color: RED,
            line_width: 4.0,
        }
    }

    fn add_dot(surface: &mut Surface, x: f64, y: f64) -> ElementId {
        let bounds = Bounds::new(x, y, 4.0, 4.0);
        surface.create(bounds, vec![Point::ORIGIN], style())
    }

    #[test]
    fn create_assigns_distinct_ids_in_draw_order() {
        let mut surface = Surface::new();
        let first = add_dot(&mut surface, 0.0, 0.0);
        let second = add_dot(&mut surface, 5.0, 5.0);

        assert_ne!(first, second);
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.elements()[0].id, first);
        assert_eq!(surface.elements()[1].id, second);
    }

    #[test]
    fn update_replaces_geometry_but_keeps_style() {
        let mut surface = Surface::new();
        let id = add_dot(&mut surface, 0.0, 0.0);

        let points = vec![Point::ORIGIN, Point::new(10.0, 0.0)];
        surface
            .update(id, Bounds::new(-2.0, 0.0, 14.0, 4.0), points.clone())
            .unwrap();

        let element = surface.get(id).unwrap();
        assert_eq!(element.bounds, Bounds::new(-2.0, 0.0, 14.0, 4.0));
        assert_eq!(element.points, points);
        assert_eq!(element.style, style());
    }

    #[test]
    fn update_unknown_element_fails() {
        let mut surface = Surface::new();
        let id = add_dot(&mut surface, 0.0, 0.0);
        surface.remove(id);

        assert_eq!(
            surface.update(id, Bounds::new(0.0, 0.0, 4.0, 4.0), vec![]),
            Err(StoreError::UnknownElement(id))
        );
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut surface = Surface::new();
        let first = add_dot(&mut surface, 0.0, 0.0);
        surface.clear();
        assert!(surface.is_empty());

        let second = add_dot(&mut surface, 0.0, 0.0);
        assert!(second > first);
    }
}
