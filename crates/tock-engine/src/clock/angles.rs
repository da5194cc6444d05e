use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::HandKind;
use crate::time::WallTime;

/// Angle in radians of a dial position given as a fraction of a full turn.
///
/// `angle(0) = π/2` (up), `angle(0.25) = 0` (right): clockwise-positive
/// fractions map to decreasing mathematical angles.
#[inline]
pub fn angle(fraction: f64) -> f64 {
    -TAU * fraction + FRAC_PI_2
}

/// How the second hand advances.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SecondsMode {
    /// Jumps once per whole second.
    #[default]
    Tick,
    /// Moves continuously using the sub-second part of the time.
    Sweep,
}

/// Hand positions in their own units before conversion to angles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialPosition {
    /// Seconds within the minute, `[0, 60)`.
    pub seconds: f64,
    /// Minutes within the hour including the seconds, `[0, 60)`.
    pub minutes: f64,
    /// Hours within the half day including the minutes, `[0, 12)`.
    pub hours: f64,
}

impl DialPosition {
    pub fn from_wall(t: WallTime, mode: SecondsMode) -> Self {
        let seconds = match mode {
            SecondsMode::Tick => f64::from(t.second),
            SecondsMode::Sweep => t.fractional_second(),
        };
        let minutes = f64::from(t.minute) + seconds / 60.0;
        let hours = f64::from(t.hour % 12) + minutes / 60.0;
        Self { seconds, minutes, hours }
    }
}

/// Hand angles for one frame, in radians (see [`angle`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClockAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl ClockAngles {
    pub fn from_position(p: DialPosition) -> Self {
        Self {
            hour: angle(p.hours / 12.0) as f32,
            minute: angle(p.minutes / 60.0) as f32,
            second: angle(p.seconds / 60.0) as f32,
        }
    }

    pub fn from_wall(t: WallTime, mode: SecondsMode) -> Self {
        Self::from_position(DialPosition::from_wall(t, mode))
    }

    #[inline]
    pub fn of(&self, kind: HandKind) -> f32 {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}

/// Direction of numeral `n` on the dial; 12 sits on top, one step per 30°.
pub fn numeral_angle(n: u8) -> f32 {
    angle(f64::from(n % 12) / 12.0) as f32
}

/// Rotation that aims a shape modeled along +Y in direction `angle`.
#[inline]
pub fn hand_rotation(angle: f32) -> f32 {
    angle - std::f32::consts::FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    const TOL: f64 = 1e-5;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < TOL
    }

    #[test]
    fn twelve_points_up() {
        assert_eq!(angle(0.0), FRAC_PI_2);
    }

    #[test]
    fn quarter_turn_points_right() {
        assert!(near(angle(0.25), 0.0));
    }

    #[test]
    fn half_turn_points_down() {
        assert!(near(angle(0.5), -FRAC_PI_2));
    }

    #[test]
    fn angle_is_periodic() {
        for i in 0..100 {
            let f = f64::from(i) / 100.0;
            let d = (angle(f) - angle(f + 1.0)).rem_euclid(TAU);
            assert!(near(d, 0.0) || near(d, TAU), "fraction {f}: {d}");
        }
    }

    #[test]
    fn quarter_past_three_with_45_seconds() {
        let t = WallTime::new(3, 15, 45);
        let p = DialPosition::from_wall(t, SecondsMode::Tick);
        assert!(near(p.minutes, 15.75));
        assert!(near(p.hours, 3.2625));

        let a = ClockAngles::from_wall(t, SecondsMode::Tick);
        assert!(near(f64::from(a.second), -TAU * (45.0 / 60.0) + FRAC_PI_2));
        assert!(near(f64::from(a.minute), -TAU * (15.75 / 60.0) + FRAC_PI_2));
        assert!(near(f64::from(a.hour), -TAU * (3.2625 / 12.0) + FRAC_PI_2));
    }

    #[test]
    fn afternoon_folds_onto_the_half_day() {
        let am = ClockAngles::from_wall(WallTime::new(3, 15, 45), SecondsMode::Tick);
        let pm = ClockAngles::from_wall(WallTime::new(15, 15, 45), SecondsMode::Tick);
        assert_eq!(am, pm);
    }

    #[test]
    fn tick_ignores_subseconds_sweep_does_not() {
        let t = WallTime::new(0, 0, 30).with_nanosecond(500_000_000);
        let tick = ClockAngles::from_wall(t, SecondsMode::Tick);
        let sweep = ClockAngles::from_wall(t, SecondsMode::Sweep);
        assert!(near(f64::from(tick.second), angle(0.5)));
        assert!(near(f64::from(sweep.second), angle(30.5 / 60.0)));
        assert!(sweep.minute < tick.minute);
    }

    #[test]
    fn midnight_has_all_hands_up() {
        let a = ClockAngles::from_wall(WallTime::new(0, 0, 0), SecondsMode::Sweep);
        for kind in HandKind::ALL {
            assert!(near(f64::from(a.of(kind)), FRAC_PI_2));
        }
    }

    #[test]
    fn numerals_are_placed_clockwise_from_the_top() {
        assert!(near(f64::from(numeral_angle(12)), FRAC_PI_2));
        assert!(near(f64::from(numeral_angle(3)), 0.0));
        assert!(near(f64::from(numeral_angle(6)), -FRAC_PI_2));
        assert!(near(f64::from(numeral_angle(9)), -std::f64::consts::PI));
    }

    #[test]
    fn hand_rotation_aims_plus_y_along_the_angle() {
        let tip = Vec2::new(0.0, 1.0);
        let at_three = tip.rotated(hand_rotation(angle(0.25) as f32));
        assert!((at_three - Vec2::new(1.0, 0.0)).length() < 1e-6);
        let at_twelve = tip.rotated(hand_rotation(angle(0.0) as f32));
        assert!((at_twelve - tip).length() < 1e-6);
    }
}
