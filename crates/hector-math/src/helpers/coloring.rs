//! Colours for segments and scalar gradients.
//!
//! Purpose
//! - `segment_color`: a fixed palette of visually distinct colours for labelling.
//! - `gradient_color`: map a scalar in `[min, max]` onto a colour ramp.
//!
//! Notes
//! - Values are clamped to the range; NaN maps like `min`.
//! - Channel conversions truncate (`255 · s` then cast), so `s = 1` gives 255.

use super::palettes::{CIVIDES, TURBO};

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit RGB colour with alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// RGB colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgbf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// RGBA colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgbaf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[inline]
fn to_unit(c: u8) -> f32 {
    f32::from(c) / 255.0
}

#[inline]
fn to_byte(c: f32) -> u8 {
    // Saturating cast; NaN becomes 0.
    (c * 255.0) as u8
}

impl From<Rgb> for Rgbf {
    fn from(c: Rgb) -> Self {
        Self {
            r: to_unit(c.r),
            g: to_unit(c.g),
            b: to_unit(c.b),
        }
    }
}

impl From<Rgbf> for Rgb {
    fn from(c: Rgbf) -> Self {
        Rgb::new(to_byte(c.r), to_byte(c.g), to_byte(c.b))
    }
}

impl From<Rgba> for Rgbaf {
    fn from(c: Rgba) -> Self {
        Self {
            r: to_unit(c.r),
            g: to_unit(c.g),
            b: to_unit(c.b),
            a: to_unit(c.a),
        }
    }
}

impl From<Rgbaf> for Rgba {
    fn from(c: Rgbaf) -> Self {
        Rgba::new(to_byte(c.r), to_byte(c.g), to_byte(c.b), to_byte(c.a))
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.with_alpha(255)
    }
}

/// Colour ramps accepted by `gradient_color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientMethod {
    Grayscale,
    /// Blue at `min`, red at `max`.
    Blue2Red,
    /// Red at `min`, blue at `max`.
    Red2Blue,
    /// Google's Turbo, an improved Jet.
    #[default]
    Turbo,
    /// Cividis, optimised for colour vision deficiency.
    Civides,
}

impl GradientMethod {
    pub const ALL: [GradientMethod; 5] = [
        GradientMethod::Grayscale,
        GradientMethod::Blue2Red,
        GradientMethod::Red2Blue,
        GradientMethod::Turbo,
        GradientMethod::Civides,
    ];

    /// Lower-case name, as used on command lines.
    pub fn name(self) -> &'static str {
        match self {
            GradientMethod::Grayscale => "grayscale",
            GradientMethod::Blue2Red => "blue2red",
            GradientMethod::Red2Blue => "red2blue",
            GradientMethod::Turbo => "turbo",
            GradientMethod::Civides => "civides",
        }
    }
}

/// Number of distinct colours `segment_color` provides.
pub const NUM_SEGMENT_COLORS: usize = 19;

static SEGMENT_COLORS: [Rgb; NUM_SEGMENT_COLORS] = [
    Rgb::new(255, 225, 25),
    Rgb::new(0, 130, 200),
    Rgb::new(245, 130, 48),
    Rgb::new(220, 190, 255),
    Rgb::new(128, 0, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(230, 25, 75),
    Rgb::new(60, 180, 75),
    Rgb::new(70, 240, 240),
    Rgb::new(240, 50, 230),
    Rgb::new(250, 190, 212),
    Rgb::new(0, 128, 128),
    Rgb::new(170, 110, 40),
    Rgb::new(255, 250, 200),
    Rgb::new(170, 255, 195),
    Rgb::new(145, 30, 180),
    Rgb::new(210, 245, 60),
    Rgb::new(128, 128, 0),
    Rgb::new(255, 215, 180),
];

/// Distinct colour for segment `index`, which must be below `NUM_SEGMENT_COLORS`.
///
/// Out-of-range indices trip a debug assertion and yield black in release builds.
pub fn segment_color(index: usize) -> Rgb {
    debug_assert!(
        index < NUM_SEGMENT_COLORS,
        "only {NUM_SEGMENT_COLORS} segment colours exist, got index {index}"
    );
    SEGMENT_COLORS.get(index).copied().unwrap_or(Rgb::BLACK)
}

/// Colour of `value` on the ramp `method` spanning `[min, max]`.
///
/// A degenerate range (`max == min`) yields the colour at `max`.
pub fn gradient_color(value: f32, min: f32, max: f32, method: GradientMethod) -> Rgb {
    let scaled = if max == min {
        1.0
    } else {
        (value - min) / (max - min)
    };
    let s = if scaled.is_nan() {
        0.0
    } else {
        scaled.clamp(0.0, 1.0)
    };
    match method {
        GradientMethod::Grayscale => {
            let v = to_byte(s);
            Rgb::new(v, v, v)
        }
        GradientMethod::Blue2Red => Rgb::new(to_byte(s), 0, to_byte(1.0 - s)),
        GradientMethod::Red2Blue => Rgb::new(to_byte(1.0 - s), 0, to_byte(s)),
        GradientMethod::Turbo => TURBO[to_byte(s) as usize],
        GradientMethod::Civides => CIVIDES[to_byte(s) as usize],
    }
}

/// `gradient_color` over `[0, 1]`.
#[inline]
pub fn gradient_color_unit(value: f32, method: GradientMethod) -> Rgb {
    gradient_color(value, 0.0, 1.0, method)
}
