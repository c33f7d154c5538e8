//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(r: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.x, r.y, r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Hollow rectangle with the given border thickness
pub fn rect_outline(r: Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(Rect::new(r.x, r.y, r.w, t), color));
    vertices.extend(rect(Rect::new(r.x, r.bottom() - t, r.w, t), color));
    vertices.extend(rect(Rect::new(r.x, r.y + t, t, r.h - 2.0 * t), color));
    vertices.extend(rect(Rect::new(r.right() - t, r.y + t, t, r.h - 2.0 * t), color));
    vertices
}

/// Upward-pointing triangle inscribed in a box centred on `center`
pub fn triangle_up(center: Vec2, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    vec![
        Vertex::new(center.x, center.y - half_h, color),
        Vertex::new(center.x - half_w, center.y + half_h, color),
        Vertex::new(center.x + half_w, center.y + half_h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a = point_on(center, radius, i, segments);
        let b = point_on(center, radius, i + 1, segments);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let inner1 = point_on(center, inner_radius, i, segments);
        let outer1 = point_on(center, outer_radius, i, segments);
        let inner2 = point_on(center, inner_radius, i + 1, segments);
        let outer2 = point_on(center, outer_radius, i + 1, segments);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

fn point_on(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * 2.0 * PI;
    Vec2::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(v.len(), 6);
        assert!(v.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(v.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let c = Vec2::new(5.0, 5.0);
        for v in circle(c, 3.0, WHITE, 16) {
            let p = Vec2::from(v.position);
            assert!(p.distance(c) <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_ring_vertex_count() {
        assert_eq!(ring(Vec2::ZERO, 1.0, 2.0, WHITE, 24).len(), 24 * 6);
    }
}
