//! Clock hands.
//!
//! Every hand is modeled pointing along local +Y from the pivot at the origin,
//! so the dial's rotation alone aims it. Forward reach never exceeds 1.0.

use crate::coords::Vec2;

use super::primitives::disc;
use super::shape::{Shape, TriangleBuilder};

/// Fan resolution of the spade bulb.
const SPADE_SEGMENTS: u32 = 48;
/// Fan resolution of the second-hand hub.
const HUB_SEGMENTS: u32 = 32;

/// Which hand of the clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];
}

/// Terminal decoration of a hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Ornament {
    /// Round bulb whose top touches the hand's reach.
    Spade { radius: f32 },
    /// Triangular point occupying the last `tip_length` of the reach.
    /// The base is `base_ratio` of the stem width.
    Taper { tip_length: f32, base_ratio: f32 },
    /// Disc centered on the pivot.
    Hub { radius: f32 },
}

/// Dimensions of one hand, in dial-radius units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub stem_width: f32,
    /// Forward reach from the pivot, including the ornament.
    pub length: f32,
    /// Counterweight length behind the pivot; `0.0` for none.
    pub tail_length: f32,
    pub ornament: Ornament,
}

impl HandStyle {
    /// Spade hour hand.
    pub const fn hour() -> Self {
        Self {
            stem_width: 0.12,
            length: 0.68,
            tail_length: 0.08,
            ornament: Ornament::Spade { radius: 0.14 },
        }
    }

    /// Dauphine-like minute hand: long stem, tapered point.
    pub const fn minute() -> Self {
        Self {
            stem_width: 0.08,
            length: 0.88,
            tail_length: 0.10,
            ornament: Ornament::Taper { tip_length: 0.12, base_ratio: 0.9 },
        }
    }

    /// Needle second hand with counterweight tail and hub.
    pub const fn second() -> Self {
        Self {
            stem_width: 0.02,
            length: 0.95,
            tail_length: 0.18,
            ornament: Ornament::Hub { radius: 0.035 },
        }
    }

    pub const fn for_kind(kind: HandKind) -> Self {
        match kind {
            HandKind::Hour => Self::hour(),
            HandKind::Minute => Self::minute(),
            HandKind::Second => Self::second(),
        }
    }

    /// Radius of the round ornament, if any.
    pub fn ornament_radius(&self) -> Option<f32> {
        match self.ornament {
            Ornament::Spade { radius } | Ornament::Hub { radius } => Some(radius),
            Ornament::Taper { .. } => None,
        }
    }

    /// Where the straight stem ends and the ornament takes over.
    fn stem_top(&self) -> f32 {
        match self.ornament {
            Ornament::Spade { radius } => self.length - radius,
            Ornament::Taper { tip_length, .. } => self.length - tip_length,
            Ornament::Hub { .. } => self.length,
        }
    }

    /// Maximum forward extent of the generated shape.
    pub fn reach(&self) -> f32 {
        match self.ornament {
            Ornament::Hub { radius } => self.length.max(radius),
            Ornament::Spade { .. } | Ornament::Taper { .. } => self.length,
        }
    }

    /// # Panics
    /// Panics on non-positive dimensions, an ornament longer than the hand,
    /// or a reach beyond the unit dial.
    pub fn validate(&self) {
        assert!(self.stem_width > 0.0, "hand: stem_width must be positive");
        assert!(self.length > 0.0, "hand: length must be positive");
        assert!(self.tail_length >= 0.0, "hand: tail_length must be >= 0");
        match self.ornament {
            Ornament::Spade { radius } => {
                assert!(radius > 0.0 && radius < self.length, "hand: spade radius out of range");
            }
            Ornament::Taper { tip_length, base_ratio } => {
                assert!(
                    tip_length > 0.0 && tip_length < self.length,
                    "hand: taper tip_length out of range"
                );
                assert!(
                    base_ratio > 0.0 && base_ratio <= 1.0,
                    "hand: taper base_ratio must be in (0, 1]"
                );
            }
            Ornament::Hub { radius } => assert!(radius > 0.0, "hand: hub radius must be positive"),
        }
        assert!(
            self.reach() <= 1.0,
            "hand: forward reach {} exceeds the dial radius",
            self.reach()
        );
    }
}

/// Default-styled hand of the given kind.
pub fn clock_hand(kind: HandKind) -> Shape {
    clock_hand_styled(&HandStyle::for_kind(kind))
}

/// Builds a hand from an explicit style as a triangle list.
///
/// # Panics
/// Panics if the style fails [`HandStyle::validate`].
pub fn clock_hand_styled(style: &HandStyle) -> Shape {
    style.validate();

    let hw = style.stem_width * 0.5;
    let stem_top = style.stem_top();
    let mut b = TriangleBuilder::new();

    b.rect(-hw, 0.0, hw, stem_top);
    if style.tail_length > 0.0 {
        b.rect(-hw, -style.tail_length, hw, 0.0);
    }

    match style.ornament {
        Ornament::Spade { radius } => {
            b.fill(&disc(SPADE_SEGMENTS, radius).translated(Vec2::new(0.0, stem_top)));
        }
        Ornament::Taper { base_ratio, .. } => {
            let bw = hw * base_ratio;
            b.tri(
                Vec2::new(-bw, stem_top),
                Vec2::new(bw, stem_top),
                Vec2::new(0.0, style.length),
            );
        }
        Ornament::Hub { radius } => b.fill(&disc(HUB_SEGMENTS, radius)),
    }

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Topology;

    const EPS: f32 = 1e-5;

    #[test]
    fn every_hand_stays_inside_the_dial() {
        for kind in HandKind::ALL {
            let s = clock_hand(kind);
            assert_eq!(s.topology(), Topology::Triangles);
            assert_eq!(s.len() % 3, 0);
            let b = s.bounds();
            assert!(b.max.y <= 1.0, "{kind:?} reaches {}", b.max.y);
        }
    }

    #[test]
    fn reach_matches_style() {
        for kind in HandKind::ALL {
            let style = HandStyle::for_kind(kind);
            let max_y = clock_hand(kind).bounds().max.y;
            assert!((max_y - style.reach()).abs() < EPS, "{kind:?}: {max_y}");
        }
    }

    #[test]
    fn tails_sit_behind_the_pivot() {
        for kind in HandKind::ALL {
            let style = HandStyle::for_kind(kind);
            let min_y = clock_hand(kind).bounds().min.y;
            let want = match style.ornament {
                Ornament::Hub { radius } => -style.tail_length.max(radius),
                _ => -style.tail_length,
            };
            assert!((min_y - want).abs() < EPS, "{kind:?}: {min_y}");
        }
    }

    #[test]
    fn hands_are_symmetric_about_their_axis() {
        for kind in HandKind::ALL {
            let b = clock_hand(kind).bounds();
            assert!((b.min.x + b.max.x).abs() < EPS, "{kind:?}");
        }
    }

    #[test]
    fn spade_bulb_is_wider_than_stem() {
        let style = HandStyle::hour();
        let b = clock_hand(HandKind::Hour).bounds();
        assert!(b.width() > style.stem_width);
        assert!((b.width() - 0.28).abs() < EPS);
    }

    #[test]
    fn ornament_radius_reports_round_ornaments() {
        assert_eq!(HandStyle::hour().ornament_radius(), Some(0.14));
        assert_eq!(HandStyle::minute().ornament_radius(), None);
        assert_eq!(HandStyle::second().ornament_radius(), Some(0.035));
    }

    #[test]
    fn tailless_hand_starts_at_pivot() {
        let style = HandStyle { tail_length: 0.0, ..HandStyle::minute() };
        assert!(clock_hand_styled(&style).bounds().min.y.abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "exceeds the dial radius")]
    fn overlong_hand_is_rejected() {
        let style = HandStyle { length: 1.2, ..HandStyle::second() };
        let _ = clock_hand_styled(&style);
    }

    #[test]
    #[should_panic(expected = "stem_width must be positive")]
    fn zero_width_hand_is_rejected() {
        let style = HandStyle { stem_width: 0.0, ..HandStyle::hour() };
        let _ = clock_hand_styled(&style);
    }
}
