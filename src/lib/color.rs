//! Colors: normalized floating-point [Color] during shading, quantized [Rgb8] on output.

use ::derive_more::Display;

use crate::{vector::Vector, DefaultType};

/// Normalized RGB color, each channel in `[0, 1]`.
pub type Color = Vector<3>;

/// Scale applied before truncating a channel to a byte. Slightly under 256 so that a channel of
/// exactly `1.0` still maps to 255.
pub const QUANTIZATION_SCALE: DefaultType = 255.999;

#[derive(Clone, Copy, Default, Debug, Display, PartialEq, Eq)]
#[display(fmt = "{} {} {}", r, g, b)]
/// 8-bit RGB pixel.
pub struct Rgb8 {
    #[allow(missing_docs)]
    pub r: u8,
    #[allow(missing_docs)]
    pub g: u8,
    #[allow(missing_docs)]
    pub b: u8,
}

impl Rgb8 {
    /// Quantize a normalized channel value: `floor(255.999 * c)`.
    ///
    /// Out-of-range input saturates to `0` or `255`, `NaN` becomes `0`.
    pub fn quantize(c: DefaultType) -> u8 {
        (QUANTIZATION_SCALE * c) as u8
    }

    #[allow(missing_docs)]
    pub fn as_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for Rgb8 {
    fn from(color: Color) -> Self {
        Self {
            r: Self::quantize(color.x()),
            g: Self::quantize(color.y()),
            b: Self::quantize(color.z()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantize_bounds() {
        assert_eq!(0, Rgb8::quantize(0.));
        assert_eq!(255, Rgb8::quantize(1.));
        assert_eq!(127, Rgb8::quantize(0.5));
        assert_eq!(0, Rgb8::quantize(-0.2));
        assert_eq!(255, Rgb8::quantize(1.7));
    }

    #[test]
    fn quantize_floors() {
        // 255.999 * 0.999 = 255.743...
        assert_eq!(255, Rgb8::quantize(0.999));
        // 255.999 * 0.25 = 63.99975
        assert_eq!(63, Rgb8::quantize(0.25));
    }

    #[test]
    fn from_color() {
        let pixel = Rgb8::from(Color::new(0.5, 0.7, 1.));

        assert_eq!(Rgb8 { r: 127, g: 179, b: 255 }, pixel);
        assert_eq!([127, 179, 255], pixel.as_bytes());
        assert_eq!("127 179 255", pixel.to_string());
    }
}
