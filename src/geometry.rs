/// Axis-aligned rectangles, the overlap test, and the star outline path.

use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Anything that occupies a rectangle on the canvas.
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// True iff the two rectangles overlap.  Every comparison is strict, so
/// rectangles that merely share an edge do not collide.
pub fn intersects<A: Bounds + ?Sized, B: Bounds + ?Sized>(a: &A, b: &B) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}

/// Ten vertices of a 5-pointed star centred on `center`, alternating between
/// the outer radius `size` and the inner radius `size / 2`.  The first
/// vertex points "up" (towards -y) after turning by `rotation` radians.
pub fn star_outline(center: Point, size: f32, rotation: f32) -> [Point; 10] {
    let mut points = [center; 10];
    for (i, p) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { size } else { size / 2.0 };
        let angle = rotation + i as f32 * PI / 5.0;
        // Canvas rotation is clockwise with y pointing down.
        p.x = center.x + radius * angle.sin();
        p.y = center.y - radius * angle.cos();
    }
    points
}
