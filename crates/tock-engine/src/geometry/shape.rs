use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// A point in a shape's normalized local space.
///
/// Layout matches the renderer's vertex buffer (`Float32x2` at location 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance from the local origin.
    #[inline]
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl From<Vec2> for Vertex {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// How a shape's vertices group into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// First vertex is the hub; every following pair closes a triangle with it.
    Fan,
    /// Every three consecutive vertices form a triangle.
    Strip,
    /// Independent line segments, two vertices each.
    Lines,
    /// Independent triangles, three vertices each.
    Triangles,
}

impl Topology {
    /// Discrete topologies can be concatenated without inventing joins.
    #[inline]
    pub fn is_discrete(self) -> bool {
        matches!(self, Topology::Lines | Topology::Triangles)
    }
}

/// Axis-aligned bounds of a shape in local space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// `true` when `self` lies inside the box `[-half.x, half.x] x [-half.y, half.y]`,
    /// allowing `eps` of float slack.
    pub fn within_half_extent(self, half: Vec2, eps: f32) -> bool {
        self.min.x >= -half.x - eps
            && self.min.y >= -half.y - eps
            && self.max.x <= half.x + eps
            && self.max.y <= half.y + eps
    }
}

/// Immutable vertex sequence plus topology, in normalized local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    topology: Topology,
    vertices: Vec<Vertex>,
}

impl Shape {
    pub(crate) fn new(topology: Topology, vertices: Vec<Vertex>) -> Self {
        debug_assert!(
            vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()),
            "shape vertices must be finite"
        );
        Self { topology, vertices }
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of all vertices. Empty shapes report zero bounds.
    pub fn bounds(&self) -> Bounds {
        let Some(first) = self.vertices.first() else {
            return Bounds::default();
        };
        let seed = Bounds { min: first.position(), max: first.position() };
        self.vertices.iter().fold(seed, |b, v| Bounds {
            min: Vec2::new(b.min.x.min(v.x), b.min.y.min(v.y)),
            max: Vec2::new(b.max.x.max(v.x), b.max.y.max(v.y)),
        })
    }

    /// Largest distance of any vertex from the local origin.
    pub fn max_radius(&self) -> f32 {
        self.vertices.iter().map(|v| v.norm()).fold(0.0, f32::max)
    }

    /// Mean vertex position.
    pub fn centroid(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return Vec2::zero();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::zero(), |acc, v| acc + v.position());
        sum / self.vertices.len() as f32
    }

    /// Copy of this shape moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Shape {
        self.mapped(|p| p + offset)
    }

    /// Copy of this shape with every vertex passed through `f`.
    pub fn mapped(&self, f: impl Fn(Vec2) -> Vec2) -> Shape {
        let vertices = self
            .vertices
            .iter()
            .map(|v| Vertex::from(f(v.position())))
            .collect();
        Shape::new(self.topology, vertices)
    }

    /// Concatenates shapes that share one discrete topology.
    ///
    /// # Panics
    /// Panics if `parts` is empty, mixes topologies, or uses fans/strips.
    pub fn concat(parts: &[&Shape]) -> Shape {
        let first = parts.first().expect("Shape::concat needs at least one part");
        let topology = first.topology;
        assert!(
            topology.is_discrete(),
            "Shape::concat: {topology:?} cannot be concatenated"
        );
        assert!(
            parts.iter().all(|p| p.topology == topology),
            "Shape::concat: mixed topologies"
        );

        let total = parts.iter().map(|p| p.len()).sum();
        let mut vertices = Vec::with_capacity(total);
        for part in parts {
            vertices.extend_from_slice(&part.vertices);
        }
        Shape::new(topology, vertices)
    }

    /// Vertices rewritten as an independent triangle list.
    ///
    /// Returns `None` for line shapes.
    pub fn triangle_list(&self) -> Option<Vec<Vertex>> {
        match self.topology {
            Topology::Triangles => Some(self.vertices.clone()),
            Topology::Fan => Some(fan_to_triangles(&self.vertices)),
            Topology::Strip => Some(strip_to_triangles(&self.vertices)),
            Topology::Lines => None,
        }
    }
}

/// Expands a triangle fan into a triangle list.
pub fn fan_to_triangles(fan: &[Vertex]) -> Vec<Vertex> {
    if fan.len() < 3 {
        return Vec::new();
    }
    let hub = fan[0];
    let mut out = Vec::with_capacity((fan.len() - 2) * 3);
    for pair in fan[1..].windows(2) {
        out.extend_from_slice(&[hub, pair[0], pair[1]]);
    }
    out
}

/// Expands a triangle strip into a triangle list, keeping a consistent winding.
pub fn strip_to_triangles(strip: &[Vertex]) -> Vec<Vertex> {
    if strip.len() < 3 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((strip.len() - 2) * 3);
    for (i, w) in strip.windows(3).enumerate() {
        if i % 2 == 0 {
            out.extend_from_slice(&[w[0], w[1], w[2]]);
        } else {
            out.extend_from_slice(&[w[1], w[0], w[2]]);
        }
    }
    out
}

/// Accumulates filled triangles for composite shapes (hands, glyphs).
#[derive(Debug, Default)]
pub(crate) struct TriangleBuilder {
    vertices: Vec<Vertex>,
}

impl TriangleBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tri(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.vertices.extend_from_slice(&[a.into(), b.into(), c.into()]);
    }

    /// Axis-aligned rectangle spanning `(x0, y0)`–`(x1, y1)`.
    pub(crate) fn rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (a, b, c, d) = (
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        );
        self.tri(a, b, c);
        self.tri(a, c, d);
    }

    /// Thick stroke from `p0` to `p1` with square caps of half the thickness.
    ///
    /// Zero-length strokes emit nothing.
    pub(crate) fn stroke(&mut self, p0: Vec2, p1: Vec2, thickness: f32) {
        let d = p1 - p0;
        let len = d.length();
        if len == 0.0 {
            return;
        }
        let half = thickness * 0.5;
        let dir = d / len;
        let normal = Vec2::new(-dir.y, dir.x) * half;
        let (s, e) = (p0 - dir * half, p1 + dir * half);

        let (a, b, c, dd) = (s + normal, e + normal, e - normal, s - normal);
        self.tri(a, b, c);
        self.tri(a, c, dd);
    }

    /// Appends a filled shape (fan, strip or triangles) as plain triangles.
    pub(crate) fn fill(&mut self, shape: &Shape) {
        if let Some(tris) = shape.triangle_list() {
            self.vertices.extend(tris);
        }
    }

    pub(crate) fn finish(self) -> Shape {
        Shape::new(Topology::Triangles, self.vertices)
    }
}
