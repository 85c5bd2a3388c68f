// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Integer layout geometry. Layout coordinates are pixels with Y growing
// downward; conversion to PDF space happens in the renderers.

use serde::{Deserialize, Serialize};

/// A point in layout (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. `top <= bottom` in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Closed polygon outline of a content object, in document point order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon has enough vertices to be stroked.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 3
    }

    /// Smallest rectangle enclosing every point, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            rect.left = rect.left.min(p.x);
            rect.top = rect.top.min(p.y);
            rect.right = rect.right.max(p.x);
            rect.bottom = rect.bottom.max(p.y);
        }
        Some(rect)
    }

    /// Parse the PAGE `points` attribute format: `"x1,y1 x2,y2 ..."`.
    pub fn parse_points(value: &str) -> Result<Self, String> {
        let mut points = Vec::new();
        for pair in value.split_whitespace() {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| format!("malformed point '{pair}'"))?;
            let x = parse_coordinate(x).ok_or_else(|| format!("malformed x in '{pair}'"))?;
            let y = parse_coordinate(y).ok_or_else(|| format!("malformed y in '{pair}'"))?;
            points.push(Point::new(x, y));
        }
        Ok(Self { points })
    }
}

/// Coordinates are integers in PAGE, but some producers write decimals.
fn parse_coordinate(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|v| v.round() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_rectangle_polygon() {
        let poly = Polygon::parse_points("10,20 110,20 110,40 10,40").unwrap();
        let bbox = poly.bounding_box().unwrap();
        assert_eq!(bbox, Rect::new(10, 20, 110, 40));
        assert_eq!(bbox.width(), 100);
        assert_eq!(bbox.height(), 20);
    }

    #[test]
    fn empty_polygon_has_no_bounding_box() {
        assert!(Polygon::default().bounding_box().is_none());
        assert!(!Polygon::default().is_drawable());
    }

    #[test]
    fn two_point_polygon_is_not_drawable() {
        let poly = Polygon::parse_points("0,0 5,5").unwrap();
        assert!(!poly.is_drawable());
        assert_eq!(poly.bounding_box(), Some(Rect::new(0, 0, 5, 5)));
    }

    #[test]
    fn parse_points_tolerates_extra_whitespace_and_decimals() {
        let poly = Polygon::parse_points("  1,2\t3.4,5.6\n7,8 ").unwrap();
        assert_eq!(
            poly.points(),
            &[Point::new(1, 2), Point::new(3, 6), Point::new(7, 8)]
        );
    }

    #[test]
    fn parse_points_rejects_garbage() {
        assert!(Polygon::parse_points("1,2 3;4").is_err());
        assert!(Polygon::parse_points("a,b").is_err());
    }
}
