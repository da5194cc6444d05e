//! Seven-segment numerals.
//!
//! Each digit is a set of lit segments from [`DIGIT_SEGMENTS`]; every lit
//! segment becomes a square-capped stroke centered on one edge (or the
//! midline) of the glyph box. The box spans `±GLYPH_HALF_WIDTH` by
//! `±GLYPH_HALF_HEIGHT` around the origin; strokes add half their thickness
//! on every side, see [`glyph_half_extent`].
//!
//! ```text
//!   AAA
//!  F   B
//!   GGG
//!  E   C
//!   DDD
//! ```

use crate::coords::Vec2;

use super::shape::{Shape, TriangleBuilder};

pub const GLYPH_HALF_WIDTH: f32 = 0.45;
pub const GLYPH_HALF_HEIGHT: f32 = 0.60;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Stroke centerline on the glyph box.
    pub fn endpoints(self) -> (Vec2, Vec2) {
        let (x0, x1) = (-GLYPH_HALF_WIDTH, GLYPH_HALF_WIDTH);
        let (y0, y1, ym) = (-GLYPH_HALF_HEIGHT, GLYPH_HALF_HEIGHT, 0.0);
        let (a, b) = match self {
            Segment::A => ((x0, y1), (x1, y1)),
            Segment::B => ((x1, y1), (x1, ym)),
            Segment::C => ((x1, ym), (x1, y0)),
            Segment::D => ((x0, y0), (x1, y0)),
            Segment::E => ((x0, ym), (x0, y0)),
            Segment::F => ((x0, y1), (x0, ym)),
            Segment::G => ((x0, ym), (x1, ym)),
        };
        (Vec2::new(a.0, a.1), Vec2::new(b.0, b.1))
    }
}

use Segment::{A, B, C, D, E, F, G};

/// Lit segments per decimal digit.
pub const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    &[A, B, C, D, E, F],
    &[B, C],
    &[A, B, G, E, D],
    &[A, B, G, C, D],
    &[F, G, B, C],
    &[A, F, G, C, D],
    &[A, F, G, E, D, C],
    &[A, B, C],
    &[A, B, C, D, E, F, G],
    &[A, B, C, D, F, G],
];

/// Lit segments of `digit`.
///
/// # Panics
/// Panics if `digit > 9`.
pub fn segments_for(digit: u8) -> &'static [Segment] {
    assert!(digit <= 9, "digit must be in 0..=9, got {digit}");
    DIGIT_SEGMENTS[digit as usize]
}

/// Half extents of a glyph drawn with strokes of `thickness`.
pub fn glyph_half_extent(thickness: f32) -> Vec2 {
    Vec2::new(GLYPH_HALF_WIDTH, GLYPH_HALF_HEIGHT) + Vec2::splat(thickness * 0.5)
}

/// Layout of the dial numerals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumeralStyle {
    /// Stroke thickness in glyph-box units.
    pub glyph_thickness: f32,
    /// Distance of each numeral's anchor from the dial center.
    pub radius: f32,
    /// Uniform draw-time scale from glyph units to dial units.
    pub scale: f32,
    /// Horizontal shift of each digit of a two-digit numeral, before the gap.
    pub half_offset: f32,
    pub gap: f32,
}

impl NumeralStyle {
    /// Bold numerals tucked inside the chapter ring.
    pub const fn classic() -> Self {
        Self {
            glyph_thickness: 0.22,
            radius: 0.73,
            scale: 0.10,
            half_offset: 0.70,
            gap: 0.20,
        }
    }

    /// Distance each digit of a two-digit numeral moves from the anchor.
    #[inline]
    pub fn pair_shift(&self) -> f32 {
        self.half_offset + self.gap
    }

    /// # Panics
    /// Panics on non-positive thickness, strokes thick enough to swallow the
    /// glyph's counters, or a pair shift that lets two digits overlap.
    pub fn validate(&self) {
        assert!(
            self.glyph_thickness > 0.0 && self.glyph_thickness < GLYPH_HALF_WIDTH,
            "numeral: glyph_thickness must be in (0, {GLYPH_HALF_WIDTH})"
        );
        assert!(self.scale > 0.0, "numeral: scale must be positive");
        assert!(self.radius >= 0.0, "numeral: radius must be >= 0");
        assert!(
            self.pair_shift() >= glyph_half_extent(self.glyph_thickness).x,
            "numeral: half_offset + gap too small, digits would overlap"
        );
    }
}

impl Default for NumeralStyle {
    fn default() -> Self {
        Self::classic()
    }
}

/// Digit `d` with the default stroke thickness.
///
/// # Panics
/// Panics if `d > 9`.
pub fn digit_glyph(d: u8) -> Shape {
    digit_glyph_with(d, NumeralStyle::classic().glyph_thickness)
}

/// Digit `d` drawn with strokes of `thickness`, as a triangle list.
///
/// # Panics
/// Panics if `d > 9` or `thickness` is not positive.
pub fn digit_glyph_with(d: u8, thickness: f32) -> Shape {
    assert!(thickness > 0.0, "glyph thickness must be positive, got {thickness}");
    let mut b = TriangleBuilder::new();
    for seg in segments_for(d) {
        let (p0, p1) = seg.endpoints();
        b.stroke(p0, p1, thickness);
    }
    b.finish()
}

/// Half extents of numeral `n` drawn with `style`, in glyph units.
///
/// Two-digit numerals span both glyphs, so their half width grows by
/// [`NumeralStyle::pair_shift`].
///
/// # Panics
/// Panics if `n` is outside `1..=12`.
pub fn numeral_half_extent(n: u8, style: &NumeralStyle) -> Vec2 {
    assert!((1..=12).contains(&n), "numeral must be in 1..=12, got {n}");
    let glyph = glyph_half_extent(style.glyph_thickness);
    if n < 10 {
        glyph
    } else {
        Vec2::new(glyph.x + style.pair_shift(), glyph.y)
    }
}

/// Dial numeral `n` with the default style.
///
/// # Panics
/// Panics if `n` is outside `1..=12`.
pub fn numeral(n: u8) -> Shape {
    numeral_styled(n, &NumeralStyle::classic())
}

/// Dial numeral `n`: a single glyph below ten, otherwise the tens glyph
/// shifted left and the ones glyph shifted right by [`NumeralStyle::pair_shift`].
///
/// # Panics
/// Panics if `n` is outside `1..=12` or the style fails validation.
pub fn numeral_styled(n: u8, style: &NumeralStyle) -> Shape {
    assert!((1..=12).contains(&n), "numeral must be in 1..=12, got {n}");
    style.validate();

    let t = style.glyph_thickness;
    if n < 10 {
        return digit_glyph_with(n, t);
    }

    let shift = style.pair_shift();
    let tens = digit_glyph_with(n / 10, t).translated(Vec2::new(-shift, 0.0));
    let ones = digit_glyph_with(n % 10, t).translated(Vec2::new(shift, 0.0));
    Shape::concat(&[&tens, &ones])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Topology;

    const EPS: f32 = 1e-5;

    #[test]
    fn segment_table_counts() {
        let counts: Vec<usize> = DIGIT_SEGMENTS.iter().map(|s| s.len()).collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn eight_lights_everything_and_zero_skips_the_middle() {
        assert_eq!(segments_for(8), &Segment::ALL);
        assert!(!segments_for(0).contains(&Segment::G));
        assert!(segments_for(0).len() == 6);
    }

    #[test]
    fn no_digit_repeats_a_segment() {
        for d in 0..=9u8 {
            let segs = segments_for(d);
            for (i, s) in segs.iter().enumerate() {
                assert!(!segs[i + 1..].contains(s), "digit {d} repeats {s:?}");
            }
        }
    }

    #[test]
    fn glyph_is_six_vertices_per_segment() {
        for d in 0..=9u8 {
            let g = digit_glyph(d);
            assert_eq!(g.topology(), Topology::Triangles);
            assert_eq!(g.len(), segments_for(d).len() * 6);
        }
    }

    #[test]
    fn glyphs_stay_in_their_box() {
        let half = glyph_half_extent(NumeralStyle::classic().glyph_thickness);
        for d in 0..=9u8 {
            assert!(digit_glyph(d).bounds().within_half_extent(half, EPS), "digit {d}");
        }
    }

    #[test]
    fn eight_fills_the_whole_box() {
        let half = glyph_half_extent(0.22);
        let b = digit_glyph(8).bounds();
        assert!((b.max.x - half.x).abs() < EPS);
        assert!((b.min.y + half.y).abs() < EPS);
    }

    #[test]
    fn one_is_drawn_on_the_right() {
        assert!(digit_glyph(1).bounds().min.x > 0.0);
    }

    #[test]
    fn single_digit_numeral_is_the_bare_glyph() {
        for n in 1..=9u8 {
            assert_eq!(numeral(n), digit_glyph(n));
        }
    }

    #[test]
    fn twelve_is_one_then_two() {
        let style = NumeralStyle::classic();
        let shift = style.pair_shift();
        let one = digit_glyph(1);
        let two = digit_glyph(2);
        let twelve = numeral(12);

        assert_eq!(twelve.len(), one.len() + two.len());
        let (left, right) = twelve.vertices().split_at(one.len());
        for (got, want) in left.iter().zip(one.vertices()) {
            assert!((got.x - (want.x - shift)).abs() < EPS && (got.y - want.y).abs() < EPS);
        }
        for (got, want) in right.iter().zip(two.vertices()) {
            assert!((got.x - (want.x + shift)).abs() < EPS && (got.y - want.y).abs() < EPS);
        }

        let cl = one.translated(Vec2::new(-shift, 0.0)).centroid();
        let cr = two.translated(Vec2::new(shift, 0.0)).centroid();
        assert!(cl.x < cr.x);
    }

    #[test]
    fn numerals_stay_inside_their_declared_extent() {
        let style = NumeralStyle::classic();
        for n in 1..=12u8 {
            let half = numeral_half_extent(n, &style);
            let bounds = numeral(n).bounds();
            assert!(bounds.within_half_extent(half, EPS), "numeral {n}: {bounds:?} vs {half:?}");
        }
    }

    #[test]
    fn two_digit_extent_spans_both_glyphs() {
        let style = NumeralStyle::classic();
        let glyph = glyph_half_extent(style.glyph_thickness);
        for n in 10..=12u8 {
            let half = numeral_half_extent(n, &style);
            assert!((half.x - (style.pair_shift() + glyph.x)).abs() < EPS);
            assert!((half.x - 1.46).abs() < EPS);
            assert_eq!(half.y, glyph.y);
            // 0, 1 and 2 all light segment B, so the ones digit touches the right edge
            let b = numeral(n).bounds();
            assert!((b.max.x - half.x).abs() < EPS, "numeral {n} max x {}", b.max.x);
        }
    }

    #[test]
    #[should_panic(expected = "numeral must be in 1..=12")]
    fn extent_of_numeral_zero_panics() {
        let _ = numeral_half_extent(0, &NumeralStyle::classic());
    }

    #[test]
    fn two_digit_halves_do_not_overlap() {
        for n in 10..=12u8 {
            let s = numeral(n);
            let split = digit_glyph(n / 10).len();
            let (l, r) = s.vertices().split_at(split);
            let l_max = l.iter().map(|v| v.x).fold(f32::MIN, f32::max);
            let r_min = r.iter().map(|v| v.x).fold(f32::MAX, f32::min);
            assert!(l_max < r_min, "numeral {n}: {l_max} >= {r_min}");
        }
    }

    #[test]
    fn ones_digit_is_centered_right_of_the_anchor() {
        let shift = NumeralStyle::classic().pair_shift();
        let ten = numeral(10);
        let (_, zero) = ten.vertices().split_at(digit_glyph(1).len());
        let mean_x = zero.iter().map(|v| v.x).sum::<f32>() / zero.len() as f32;
        assert!((mean_x - shift).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "digit must be in 0..=9")]
    fn digit_out_of_range_panics() {
        let _ = digit_glyph(10);
    }

    #[test]
    #[should_panic(expected = "numeral must be in 1..=12")]
    fn numeral_zero_panics() {
        let _ = numeral(0);
    }

    #[test]
    #[should_panic(expected = "numeral must be in 1..=12")]
    fn numeral_thirteen_panics() {
        let _ = numeral(13);
    }

    #[test]
    #[should_panic(expected = "digits would overlap")]
    fn cramped_pair_is_rejected() {
        let style = NumeralStyle { half_offset: 0.1, gap: 0.0, ..NumeralStyle::classic() };
        let _ = numeral_styled(12, &style);
    }
}
