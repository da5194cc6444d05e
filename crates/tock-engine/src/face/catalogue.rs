use crate::clock::{hand_rotation, numeral_angle, ClockAngles};
use crate::coords::Vec2;
use crate::geometry::{
    clock_hand_styled, disc, numeral_styled, radial_ticks, ring, HandKind, Shape,
};
use crate::scene::{DrawList, Transform};
use crate::time::WallTime;

use super::style::{FaceStyle, RingStyle, TickStyle};

/// Names of the shapes in the catalogue.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeId {
    Bezel,
    Dial,
    ChapterRing,
    MinuteTicks,
    HourTicks,
    Hand(HandKind),
    CenterCap,
    /// `1..=12`
    Numeral(u8),
}

/// Shapes generated once at startup plus the style that places them.
#[derive(Debug, Clone)]
pub struct ClockFace {
    style: FaceStyle,
    /// In paint order.
    shapes: Vec<(ShapeId, Shape)>,
}

fn ring_of(r: &RingStyle) -> Shape {
    ring(r.segments, r.inner_radius, r.outer_radius)
}

fn ticks_of(t: &TickStyle) -> Shape {
    radial_ticks(t.count, t.inner_radius, t.outer_radius, t.half_width)
}

impl ClockFace {
    /// Generates the whole catalogue.
    ///
    /// # Panics
    /// Panics if any part of `style` violates a generator precondition.
    pub fn build(style: FaceStyle) -> Self {
        let d = &style.dial;
        let mut shapes = Vec::with_capacity(9 + 12);

        shapes.push((ShapeId::Bezel, ring_of(&d.bezel)));
        shapes.push((ShapeId::Dial, disc(d.face_segments, 1.0)));
        shapes.push((ShapeId::ChapterRing, ring_of(&d.chapter_ring)));
        shapes.push((ShapeId::MinuteTicks, ticks_of(&d.minute_ticks)));
        shapes.push((ShapeId::HourTicks, ticks_of(&d.hour_ticks)));
        for n in 1..=12u8 {
            shapes.push((ShapeId::Numeral(n), numeral_styled(n, &style.numerals)));
        }
        for kind in HandKind::ALL {
            shapes.push((ShapeId::Hand(kind), clock_hand_styled(style.hand(kind))));
        }
        shapes.push((ShapeId::CenterCap, disc(d.cap_segments, 1.0)));

        log::debug!(
            "clock face built: {} shapes, {} vertices",
            shapes.len(),
            shapes.iter().map(|(_, s)| s.len()).sum::<usize>()
        );

        Self { style, shapes }
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// All shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|(k, _)| *k == id).map(|(_, s)| s)
    }

    /// Hand angles for `t` under this face's seconds policy.
    pub fn angles_at(&self, t: WallTime) -> ClockAngles {
        ClockAngles::from_wall(t, self.style.seconds)
    }

    /// Placement of `id` for a frame showing `angles`.
    pub fn transform(&self, id: ShapeId, angles: &ClockAngles) -> Transform {
        let d = &self.style.dial;
        match id {
            ShapeId::Dial => Transform::uniform(d.face_radius),
            ShapeId::CenterCap => Transform::uniform(d.cap_radius),
            ShapeId::Hand(kind) => Transform::rotated(hand_rotation(angles.of(kind))),
            ShapeId::Numeral(n) => {
                let ns = &self.style.numerals;
                Transform::uniform(ns.scale)
                    .with_translate(Vec2::from_polar(numeral_angle(n), ns.radius))
            }
            ShapeId::Bezel | ShapeId::ChapterRing | ShapeId::MinuteTicks | ShapeId::HourTicks => {
                Transform::IDENTITY
            }
        }
    }

    /// Records one frame of the face into `list`, back to front.
    pub fn record(&self, angles: &ClockAngles, list: &mut DrawList) {
        let p = &self.style.palette;
        for (id, _) in &self.shapes {
            let color = match *id {
                ShapeId::Bezel => p.bezel,
                ShapeId::Dial => p.face,
                ShapeId::ChapterRing => p.chapter_ring,
                ShapeId::MinuteTicks | ShapeId::HourTicks => p.ticks,
                ShapeId::Numeral(_) => p.numerals,
                ShapeId::Hand(kind) => p.hand(kind),
                ShapeId::CenterCap => p.cap,
            };
            list.push_shape(*id, self.transform(*id, angles), color);
        }
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::build(FaceStyle::classic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SecondsMode;
    use crate::scene::DrawCmd;

    const EPS: f32 = 1e-4;

    fn ids(list: &DrawList) -> Vec<ShapeId> {
        list.iter()
            .map(|c| match c {
                DrawCmd::Shape(s) => s.shape,
            })
            .collect()
    }

    fn placed_tip(face: &ClockFace, kind: HandKind, t: WallTime) -> Vec2 {
        let angles = face.angles_at(t);
        let reach = face.style().hand(kind).reach();
        face.transform(ShapeId::Hand(kind), &angles)
            .apply(Vec2::new(0.0, reach))
    }

    #[test]
    fn catalogue_has_every_named_shape_once() {
        let face = ClockFace::default();
        let all: Vec<ShapeId> = face.shapes().map(|(id, _)| id).collect();
        assert_eq!(all.len(), 21);
        for (i, id) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(id), "{id:?} twice");
        }
        for n in 1..=12u8 {
            assert!(face.shape(ShapeId::Numeral(n)).is_some());
        }
        for kind in HandKind::ALL {
            assert!(face.shape(ShapeId::Hand(kind)).is_some());
        }
    }

    #[test]
    fn record_paints_furniture_then_numerals_then_hands() {
        let face = ClockFace::default();
        let mut list = DrawList::new();
        face.record(&ClockAngles::default(), &mut list);
        let order = ids(&list);

        assert_eq!(order.len(), 21);
        assert_eq!(order[0], ShapeId::Bezel);
        assert_eq!(order[1], ShapeId::Dial);
        assert_eq!(*order.last().unwrap(), ShapeId::CenterCap);

        let pos = |id| order.iter().position(|x| *x == id).unwrap();
        assert!(pos(ShapeId::HourTicks) < pos(ShapeId::Numeral(1)));
        assert!(pos(ShapeId::Numeral(12)) < pos(ShapeId::Hand(HandKind::Hour)));
        assert!(pos(ShapeId::Hand(HandKind::Hour)) < pos(ShapeId::Hand(HandKind::Minute)));
        assert!(pos(ShapeId::Hand(HandKind::Minute)) < pos(ShapeId::Hand(HandKind::Second)));
    }

    #[test]
    fn hands_point_where_the_time_says() {
        let face = ClockFace::default();
        let t = WallTime::new(3, 0, 30);

        let hour = placed_tip(&face, HandKind::Hour, t);
        assert!(hour.x > 0.0 && hour.y.abs() < 0.01, "{hour:?}");

        let minute = placed_tip(&face, HandKind::Minute, t);
        assert!(minute.y > 0.0 && minute.x > 0.0 && minute.x < 0.1, "{minute:?}");

        let second = placed_tip(&face, HandKind::Second, t);
        assert!(second.y < 0.0 && second.x.abs() < EPS, "{second:?}");
    }

    #[test]
    fn numerals_sit_on_their_circle_upright() {
        let face = ClockFace::default();
        let ns = face.style().numerals;
        let angles = ClockAngles::default();

        let twelve = face.transform(ShapeId::Numeral(12), &angles);
        assert_eq!(twelve.rotation, 0.0);
        assert!((twelve.translate - Vec2::new(0.0, ns.radius)).length() < EPS);

        let three = face.transform(ShapeId::Numeral(3), &angles);
        assert!((three.translate - Vec2::new(ns.radius, 0.0)).length() < EPS);
    }

    #[test]
    fn nothing_overdraws_the_bezel() {
        let face = ClockFace::default();
        let limit = face.style().dial.bezel.outer_radius;
        let angles = face.angles_at(WallTime::new(10, 10, 40));
        for (id, shape) in face.shapes() {
            let tf = face.transform(id, &angles);
            for v in shape.vertices() {
                let p = tf.apply(v.position());
                assert!(p.length() <= limit + EPS, "{id:?} reaches {}", p.length());
            }
        }
    }

    #[test]
    fn colors_follow_the_palette() {
        let face = ClockFace::default();
        let mut list = DrawList::new();
        face.record(&ClockAngles::default(), &mut list);
        let p = face.style().palette;
        for cmd in list.iter() {
            let DrawCmd::Shape(s) = cmd;
            if s.shape == ShapeId::Hand(HandKind::Second) {
                assert_eq!(s.color, p.second_hand);
            }
            if s.shape == ShapeId::Bezel {
                assert_eq!(s.color, p.bezel);
            }
        }
    }

    #[test]
    fn sweep_style_moves_the_second_hand_between_ticks() {
        let style = FaceStyle { seconds: SecondsMode::Sweep, ..FaceStyle::classic() };
        let face = ClockFace::build(style);
        let t = WallTime::new(0, 0, 15).with_nanosecond(500_000_000);
        let a = face.angles_at(t);
        let tick = ClockAngles::from_wall(t, SecondsMode::Tick);
        assert!(a.second < tick.second);
    }
}
