use crate::clock::SecondsMode;
use crate::geometry::{HandKind, HandStyle, NumeralStyle};
use crate::paint::Color;

/// Annulus parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStyle {
    pub segments: u32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Radial tick marks. `half_width = None` draws hairlines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickStyle {
    pub count: u32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub half_width: Option<f32>,
}

/// Static furniture of the dial, in dial-radius units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialStyle {
    pub bezel: RingStyle,
    /// Resolution of the unit face disc.
    pub face_segments: u32,
    /// Draw-time scale applied to the unit face disc.
    pub face_radius: f32,
    pub chapter_ring: RingStyle,
    pub minute_ticks: TickStyle,
    pub hour_ticks: TickStyle,
    pub cap_segments: u32,
    /// Draw-time scale applied to the unit center-cap disc.
    pub cap_radius: f32,
}

impl DialStyle {
    pub const fn classic() -> Self {
        Self {
            bezel: RingStyle { segments: 256, inner_radius: 0.86, outer_radius: 0.98 },
            face_segments: 128,
            face_radius: 0.86,
            chapter_ring: RingStyle { segments: 256, inner_radius: 0.82, outer_radius: 0.84 },
            minute_ticks: TickStyle {
                count: 60,
                inner_radius: 0.82,
                outer_radius: 0.88,
                half_width: None,
            },
            hour_ticks: TickStyle {
                count: 12,
                inner_radius: 0.78,
                outer_radius: 0.90,
                half_width: Some(0.006),
            },
            cap_segments: 40,
            cap_radius: 0.035,
        }
    }
}

/// Fill colors, one per catalogue part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub bezel: Color,
    pub face: Color,
    pub chapter_ring: Color,
    pub ticks: Color,
    pub numerals: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub cap: Color,
}

impl Palette {
    /// Walnut bezel, white face, black furniture, gold seconds.
    pub fn classic() -> Self {
        Self {
            background: Color::white(),
            bezel: Color::from_srgb(0.42, 0.22, 0.12),
            face: Color::white(),
            chapter_ring: Color::from_srgb(0.75, 0.75, 0.75),
            ticks: Color::black(),
            numerals: Color::black(),
            hour_hand: Color::black(),
            minute_hand: Color::black(),
            second_hand: Color::from_srgb(0.80, 0.70, 0.35),
            cap: Color::black(),
        }
    }

    pub fn hand(&self, kind: HandKind) -> Color {
        match kind {
            HandKind::Hour => self.hour_hand,
            HandKind::Minute => self.minute_hand,
            HandKind::Second => self.second_hand,
        }
    }
}

/// Everything that decides how the face looks, chosen once at startup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceStyle {
    pub dial: DialStyle,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    pub numerals: NumeralStyle,
    pub palette: Palette,
    pub seconds: SecondsMode,
}

impl FaceStyle {
    pub fn classic() -> Self {
        Self {
            dial: DialStyle::classic(),
            hour_hand: HandStyle::hour(),
            minute_hand: HandStyle::minute(),
            second_hand: HandStyle::second(),
            numerals: NumeralStyle::classic(),
            palette: Palette::classic(),
            seconds: SecondsMode::Tick,
        }
    }

    pub fn hand(&self, kind: HandKind) -> &HandStyle {
        match kind {
            HandKind::Hour => &self.hour_hand,
            HandKind::Minute => &self.minute_hand,
            HandKind::Second => &self.second_hand,
        }
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::classic()
    }
}
