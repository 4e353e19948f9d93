use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::midpoint;

/// Point in normalized device coordinates. Not clamped to [-1, 1].
pub type Point2D = Vec2;

/// RGB triple, nominally in [0, 1] per channel
pub type ColorRGB = [f32; 3];

/// Ordered triple of points. Vertex order decides which midpoints pair up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle {
    /// Seed triangle the render loop starts from
    pub const DEFAULT_SEED: Triangle = Triangle::new(
        Vec2::new(0.0, 0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(-0.5, -0.5),
    );

    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    pub fn from_array(points: [[f32; 2]; 3]) -> Self {
        Self::new(
            Vec2::from_array(points[0]),
            Vec2::from_array(points[1]),
            Vec2::from_array(points[2]),
        )
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Triangle joining the three edge midpoints: (mid(A,B), mid(B,C), mid(A,C))
    pub fn medial(&self) -> Triangle {
        Triangle::new(
            midpoint(self.a, self.b),
            midpoint(self.b, self.c),
            midpoint(self.a, self.c),
        )
    }

    /// (A, mid(A,B), mid(A,C))
    pub fn corner_a(&self) -> Triangle {
        Triangle::new(self.a, midpoint(self.a, self.b), midpoint(self.a, self.c))
    }

    /// (B, mid(A,B), mid(B,C))
    pub fn corner_b(&self) -> Triangle {
        Triangle::new(self.b, midpoint(self.a, self.b), midpoint(self.b, self.c))
    }

    /// (C, mid(A,C), mid(B,C))
    pub fn corner_c(&self) -> Triangle {
        Triangle::new(self.c, midpoint(self.a, self.c), midpoint(self.b, self.c))
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::DEFAULT_SEED
    }
}

/// Colors stamped onto every emitted triangle, one per corner
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleColors {
    pub a: ColorRGB,
    pub b: ColorRGB,
    pub c: ColorRGB,
}

impl TriangleColors {
    /// Grey ramp: light top corner, dark base corners
    pub const SHADED: TriangleColors = TriangleColors {
        a: [0.5, 0.5, 0.5],
        b: [0.15, 0.15, 0.1],
        c: [0.1, 0.1, 0.1],
    };

    pub const WHITE: TriangleColors = TriangleColors::uniform([1.0, 1.0, 1.0]);

    pub const fn uniform(color: ColorRGB) -> Self {
        Self {
            a: color,
            b: color,
            c: color,
        }
    }

    pub fn as_array(&self) -> [ColorRGB; 3] {
        [self.a, self.b, self.c]
    }
}

/// Interleaved vertex layout for the GPU: 3 position floats, 3 color floats
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexRecord {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl VertexRecord {
    pub const FLOATS: usize = 6;
    pub const STRIDE: usize = Self::FLOATS * std::mem::size_of::<f32>();

    pub fn new(point: Point2D, color: ColorRGB) -> Self {
        Self {
            position: [point.x, point.y, 0.0],
            color,
        }
    }

    pub fn point(&self) -> Point2D {
        Vec2::new(self.position[0], self.position[1])
    }

    pub fn to_array(&self) -> [f32; 6] {
        let [x, y, z] = self.position;
        let [r, g, b] = self.color;
        [x, y, z, r, g, b]
    }
}

/// Append-only sequence of vertex records, three per triangle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<VertexRecord>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `triangles` triangles
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles.saturating_mul(3)),
        }
    }

    pub fn push_triangle(&mut self, triangle: &Triangle, colors: &TriangleColors) {
        let points = triangle.vertices();
        let colors = colors.as_array();
        self.vertices.extend(
            points
                .iter()
                .zip(colors.iter())
                .map(|(&point, &color)| VertexRecord::new(point, color)),
        );
    }

    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Rebuild the emitted triangles from consecutive vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0].point(), v[1].point(), v[2].point()))
    }

    /// Flat float view, 6 floats per vertex
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Byte view ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
