//! Defines the [SignatureStyle] struct, the visual style applied when drawing a
//! signature preset, and the [PresetColor] struct it uses for stroke color.

/// An RGBA color used for signature strokes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PresetColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl PresetColor {
    pub const BLACK: PresetColor = PresetColor::new(0, 0, 0, 255);
    pub const BLUE: PresetColor = PresetColor::new(0, 0, 255, 255);
    pub const DARK_BLUE: PresetColor = PresetColor::new(0, 0, 128, 255);
    pub const RED: PresetColor = PresetColor::new(255, 0, 0, 255);

    /// Constructs a new [PresetColor] object from the given arguments.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            r: red,
            g: green,
            b: blue,
            a: alpha,
        }
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.r
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.g
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.b
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.a
    }
}

/// The stroke color, stroke width, and opacity of a signature, as understood by the
/// annotation engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignatureStyle {
    stroke_color: PresetColor,
    stroke_width: f32,
    opacity: f32,
}

impl Default for SignatureStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureStyle {
    /// Creates a new [SignatureStyle] with default styling: a fully opaque 1.0pt black stroke.
    pub fn new() -> Self {
        Self {
            stroke_color: PresetColor::BLACK,
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: PresetColor) -> Self {
        self.stroke_color = color;
        self
    }

    /// Sets the stroke width in points. Negative widths are clamped to zero.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Sets the opacity, clamped to `0.0..=1.0`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn stroke_color(&self) -> PresetColor {
        self.stroke_color
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}
