//! Shape generator.
//!
//! Pure functions producing immutable [`Shape`]s in normalized local space:
//! unit-circle primitives, clock hands along +Y and seven-segment numerals.
//! Malformed parameters are programmer errors and panic.

mod glyph;
mod hand;
mod primitives;
mod shape;

pub use glyph::{
    digit_glyph, digit_glyph_with, glyph_half_extent, numeral, numeral_half_extent,
    numeral_styled, segments_for, NumeralStyle, Segment, DIGIT_SEGMENTS, GLYPH_HALF_HEIGHT,
    GLYPH_HALF_WIDTH,
};
pub use hand::{clock_hand, clock_hand_styled, HandKind, HandStyle, Ornament};
pub use primitives::{annulus, disc, radial_ticks, ring, MIN_SEGMENTS};
pub use shape::{fan_to_triangles, strip_to_triangles, Bounds, Shape, Topology, Vertex};
