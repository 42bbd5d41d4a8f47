// Pointer gesture handling in device coordinates (origin top-left of the view)
use crate::circle::BezierCircle;
use crate::models::Point;
use euclid::default::Size2D;

/// A pointer event with device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
}

/// Turns a stream of pointer events into selection and drag calls on a circle.
#[derive(Debug, Clone)]
pub struct DragController {
    view_size: Size2D<f32>,
    last: Option<Point>,
}

impl DragController {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_size: Size2D::new(width, height),
            last: None,
        }
    }

    /// Device coordinates to the circle's centered plane.
    pub fn to_centered(&self, x: f32, y: f32) -> Point {
        Point::new(x - self.view_size.width / 2.0, y - self.view_size.height / 2.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Apply one event. Returns true when the view should be redrawn.
    pub fn handle(&mut self, circle: &mut BezierCircle, event: TouchEvent) -> bool {
        match event {
            TouchEvent::Down { x, y } => {
                if let Some(index) = circle.hit_test(self.to_centered(x, y)) {
                    // hit_test only yields valid indices
                    if circle.select_for_drag(index).is_ok() {
                        self.last = Some(Point::new(x, y));
                    }
                }
            }
            TouchEvent::Move { x, y } => {
                let Some(last) = self.last else {
                    return true;
                };
                circle.translate_selected(x - last.x, y - last.y);
                self.last = Some(Point::new(x, y));
            }
            TouchEvent::Up | TouchEvent::Cancel => {
                circle.clear_selection();
                self.last = None;
            }
        }
        true
    }
}
