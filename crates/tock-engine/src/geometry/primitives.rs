//! Circular primitives: rings, discs and radial tick marks.
//!
//! Angles are sampled counter-clockwise from +X at `2π·i/segments`, so sample
//! `segments` coincides with sample `0` and closes the outline.

use std::f32::consts::TAU;

use crate::coords::Vec2;

use super::shape::{Shape, Topology, Vertex};

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;

fn check_segments(op: &str, segments: u32) {
    assert!(
        segments >= MIN_SEGMENTS,
        "{op}: segments must be >= {MIN_SEGMENTS}, got {segments}"
    );
}

fn check_radii(op: &str, inner: f32, outer: f32) {
    assert!(
        inner.is_finite() && outer.is_finite() && 0.0 <= inner && inner < outer,
        "{op}: radii must satisfy 0 <= inner < outer, got inner={inner} outer={outer}"
    );
}

#[inline]
fn unit(i: u32, segments: u32) -> Vec2 {
    Vec2::from_polar(i as f32 * (TAU / segments as f32), 1.0)
}

/// Annulus between `inner_radius` and `outer_radius` as a triangle strip.
///
/// Emits `segments + 1` inner/outer pairs, inner point first.
///
/// # Panics
/// Panics if `segments < 3` or the radii are not `0 <= inner < outer`.
pub fn ring(segments: u32, inner_radius: f32, outer_radius: f32) -> Shape {
    check_segments("ring", segments);
    check_radii("ring", inner_radius, outer_radius);

    let mut v = Vec::with_capacity((segments as usize + 1) * 2);
    for i in 0..=segments {
        let d = unit(i, segments);
        v.push(Vertex::from(d * inner_radius));
        v.push(Vertex::from(d * outer_radius));
    }
    Shape::new(Topology::Strip, v)
}

/// Same annulus as [`ring`], emitted as independent triangles.
///
/// # Panics
/// Same preconditions as [`ring`].
pub fn annulus(segments: u32, inner_radius: f32, outer_radius: f32) -> Shape {
    check_segments("annulus", segments);
    check_radii("annulus", inner_radius, outer_radius);

    let mut v = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let (a, b) = (unit(i, segments), unit(i + 1, segments));
        let (a_in, a_out) = (Vertex::from(a * inner_radius), Vertex::from(a * outer_radius));
        let (b_in, b_out) = (Vertex::from(b * inner_radius), Vertex::from(b * outer_radius));
        v.extend_from_slice(&[a_in, a_out, b_out, a_in, b_out, b_in]);
    }
    Shape::new(Topology::Triangles, v)
}

/// Filled disc as a fan: the center followed by `segments + 1` boundary samples.
///
/// # Panics
/// Panics if `segments < 3` or `radius` is not positive.
pub fn disc(segments: u32, radius: f32) -> Shape {
    check_segments("disc", segments);
    assert!(
        radius.is_finite() && radius > 0.0,
        "disc: radius must be positive, got {radius}"
    );

    let mut v = Vec::with_capacity(segments as usize + 2);
    v.push(Vertex::new(0.0, 0.0));
    for i in 0..=segments {
        v.push(Vertex::from(unit(i, segments) * radius));
    }
    Shape::new(Topology::Fan, v)
}

/// `count` evenly spaced radial marks between `inner_radius` and `outer_radius`.
///
/// Mark `i` is centered on `2π·i/count`. With `half_width = None` each mark is
/// a zero-width line segment (two vertices); with `Some(w)` it is a filled quad
/// reaching `w` to either side of the mark's axis (six vertices).
///
/// # Panics
/// Panics if `count == 0`, the radii are not `0 <= inner < outer`, or the
/// half-width is not positive.
pub fn radial_ticks(
    count: u32,
    inner_radius: f32,
    outer_radius: f32,
    half_width: Option<f32>,
) -> Shape {
    assert!(count >= 1, "radial_ticks: count must be >= 1");
    check_radii("radial_ticks", inner_radius, outer_radius);

    match half_width {
        None => {
            let mut v = Vec::with_capacity(count as usize * 2);
            for i in 0..count {
                let d = unit(i, count);
                v.push(Vertex::from(d * inner_radius));
                v.push(Vertex::from(d * outer_radius));
            }
            Shape::new(Topology::Lines, v)
        }
        Some(w) => {
            assert!(
                w.is_finite() && w > 0.0,
                "radial_ticks: half_width must be positive, got {w}"
            );
            let mut v = Vec::with_capacity(count as usize * 6);
            for i in 0..count {
                let d = unit(i, count);
                let side = Vec2::new(-d.y, d.x) * w;
                let (p0, p1) = (d * inner_radius, d * outer_radius);
                let (a, b, c, e) = (p0 - side, p1 - side, p1 + side, p0 + side);
                v.extend([a, b, c, a, c, e].map(Vertex::from));
            }
            Shape::new(Topology::Triangles, v)
        }
    }
}
