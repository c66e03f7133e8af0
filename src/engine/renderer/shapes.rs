// CPU tessellation of flat 2D shapes into a triangle list

use glam::Vec2;
use std::f32::consts::TAU;

use super::glyphs::{glyph, GLYPH_ADVANCE, GLYPH_HEIGHT};
use super::{Color, Vertex};

/// Fewest segments used for a round shape
const MIN_SEGMENTS: usize = 12;
/// Most segments used for a round shape
const MAX_SEGMENTS: usize = 96;

/// A frame's worth of shapes, drawn back to front in insertion order
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    /// Convert colors to linear light (sRGB render target)
    linear: bool,
}

impl ShapeBatch {
    pub fn new(linear: bool) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            linear,
        }
    }

    /// Drop all geometry, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_linear(&self) -> bool {
        self.linear
    }

    fn color(&self, color: Color) -> [f32; 4] {
        if self.linear {
            color.to_linear_array()
        } else {
            color.to_srgb_array()
        }
    }

    fn push_vertex(&mut self, position: Vec2, color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position, color));
        index
    }

    /// Filled circle
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ellipse(center, Vec2::splat(radius), color);
    }

    /// Filled axis-aligned ellipse
    pub fn ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }

        let segments = segments_for(radii.max_element());
        let color = self.color(color);
        let center_idx = self.push_vertex(center, color);
        let first = center_idx + 1;

        for i in 0..segments {
            let angle = (i as f32 / segments as f32) * TAU;
            let point = center + Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y);
            self.push_vertex(point, color);
        }

        for i in 0..segments as u32 {
            let next = (i + 1) % segments as u32;
            self.indices
                .extend_from_slice(&[center_idx, first + i, first + next]);
        }
    }

    /// Filled ellipse inscribed in the rectangle at `min` with `size`
    pub fn ellipse_in_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.ellipse(min + size * 0.5, size * 0.5, color);
    }

    /// Filled convex polygon (fan from the first point)
    pub fn polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }

        let color = self.color(color);
        let first = self.vertices.len() as u32;
        for point in points {
            self.push_vertex(*point, color);
        }
        for i in 1..points.len() as u32 - 1 {
            self.indices.extend_from_slice(&[first, first + i, first + i + 1]);
        }
    }

    /// Filled axis-aligned rectangle
    pub fn rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.polygon(
            &[
                min,
                Vec2::new(min.x + size.x, min.y),
                min + size,
                Vec2::new(min.x, min.y + size.y),
            ],
            color,
        );
    }

    /// Line segment `width` pixels thick with square ends
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        let dir = b - a;
        let length = dir.length();
        if length <= f32::EPSILON || width <= 0.0 {
            return;
        }

        let normal = Vec2::new(-dir.y, dir.x) / length * (width * 0.5);
        self.polygon(&[a + normal, b + normal, b - normal, a - normal], color);
    }

    /// Connected line segments
    pub fn polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], width, color);
        }
    }

    /// Stroked elliptical arc from `start` to `end` radians
    ///
    /// Angles run counter-clockwise as seen on screen, so `PI..TAU` is the
    /// lower half.
    pub fn arc(&mut self, center: Vec2, radii: Vec2, start: f32, end: f32, width: f32, color: Color) {
        let sweep = end - start;
        if sweep.abs() <= f32::EPSILON {
            return;
        }

        let full = segments_for(radii.max_element());
        let segments = ((full as f32 * sweep.abs() / TAU).ceil() as usize).max(2);
        let points: Vec<Vec2> = (0..=segments)
            .map(|i| {
                let angle = start + sweep * (i as f32 / segments as f32);
                center + Vec2::new(angle.cos() * radii.x, -angle.sin() * radii.y)
            })
            .collect();
        self.polyline(&points, width, color);
    }

    /// Stroke text with its top-left corner at `origin`
    pub fn text(&mut self, text: &str, origin: Vec2, height: f32, stroke: f32, color: Color) {
        let unit = height / GLYPH_HEIGHT;
        let mut pen = origin;
        for c in text.chars() {
            for segment in glyph(c) {
                let a = pen + Vec2::new(segment[0], segment[1]) * unit;
                let b = pen + Vec2::new(segment[2], segment[3]) * unit;
                self.line(a, b, stroke, color);
            }
            pen.x += GLYPH_ADVANCE * unit;
        }
    }
}

/// Segment count for a round shape of the given radius
fn segments_for(radius: f32) -> usize {
    ((radius * 0.75) as usize).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn batch() -> ShapeBatch {
        ShapeBatch::new(false)
    }

    #[test]
    fn test_empty_batch() {
        let b = batch();
        assert!(b.is_empty());
        assert!(b.vertices().is_empty());
    }

    #[test]
    fn test_circle_is_fan() {
        let mut b = batch();
        b.circle(Vec2::new(10.0, 10.0), 8.0, Color::WHITE);

        // Small radius uses the minimum segment count
        assert_eq!(b.vertices().len(), MIN_SEGMENTS + 1);
        assert_eq!(b.indices().len(), MIN_SEGMENTS * 3);
        for v in &b.vertices()[1..] {
            let p = Vec2::from(v.position);
            assert_relative_eq!(p.distance(Vec2::new(10.0, 10.0)), 8.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_degenerate_shapes_add_nothing() {
        let mut b = batch();
        b.circle(Vec2::ZERO, 0.0, Color::WHITE);
        b.polygon(&[Vec2::ZERO, Vec2::ONE], Color::WHITE);
        b.line(Vec2::ONE, Vec2::ONE, 3.0, Color::WHITE);
        b.rect(Vec2::ZERO, Vec2::new(0.0, 5.0), Color::WHITE);
        assert!(b.is_empty());
    }

    #[test]
    fn test_indices_reference_existing_vertices() {
        let mut b = batch();
        b.circle(Vec2::new(50.0, 50.0), 40.0, Color::GRAY);
        b.polygon(
            &[Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(0.0, 5.0)],
            Color::PINK,
        );
        b.arc(Vec2::ZERO, Vec2::splat(10.0), PI, 2.0 * PI, 2.0, Color::BLACK);
        let count = b.vertices().len() as u32;
        assert!(b.indices().iter().all(|i| *i < count));
        assert_eq!(b.indices().len() % 3, 0);
    }

    #[test]
    fn test_polygon_fan_triangle_count() {
        let mut b = batch();
        b.polygon(
            &[
                Vec2::ZERO,
                Vec2::new(4.0, 0.0),
                Vec2::new(5.0, 3.0),
                Vec2::new(2.0, 5.0),
                Vec2::new(-1.0, 3.0),
            ],
            Color::WHITE,
        );
        assert_eq!(b.vertices().len(), 5);
        assert_eq!(b.indices().len(), 9);
    }

    #[test]
    fn test_line_has_requested_width() {
        let mut b = batch();
        b.line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, Color::BLACK);
        let ys: Vec<f32> = b.vertices().iter().map(|v| v.position[1]).collect();
        assert_eq!(ys, vec![2.0, 2.0, -2.0, -2.0]);
    }

    #[test]
    fn test_ellipse_in_rect_centers() {
        let mut b = batch();
        b.ellipse_in_rect(Vec2::new(0.0, 0.0), Vec2::new(200.0, 150.0), Color::GRAY);
        assert_eq!(b.vertices()[0].position, [100.0, 75.0]);
    }

    #[test]
    fn test_lower_half_arc_points_down() {
        let mut b = batch();
        b.arc(Vec2::ZERO, Vec2::splat(10.0), PI, 2.0 * PI, 1.0, Color::BLACK);
        // Screen y grows downward, so the lower half has y >= 0 (minus stroke)
        assert!(b.vertices().iter().all(|v| v.position[1] >= -0.5 - 1e-4));
        assert!(b.vertices().iter().any(|v| v.position[1] > 9.0));
    }

    #[test]
    fn test_text_draws_strokes_for_known_glyphs() {
        let mut b = batch();
        b.text("MIAU!", Vec2::ZERO, 30.0, 3.0, Color::BLACK);
        // M(4) I(3) A(5) U(3) !(2) segments, four vertices each
        assert_eq!(b.vertices().len(), 17 * 4);
    }

    #[test]
    fn test_linear_batch_converts_colors() {
        let mut b = ShapeBatch::new(true);
        b.rect(Vec2::ZERO, Vec2::ONE, Color::GRAY);
        assert!(b.is_linear());
        assert!(b.vertices()[0].color[0] < 128.0 / 255.0);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut b = ShapeBatch::new(true);
        b.circle(Vec2::ZERO, 5.0, Color::WHITE);
        b.clear();
        assert!(b.is_empty());
        assert!(b.is_linear());
    }
}
