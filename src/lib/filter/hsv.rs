//! Conversions between RGB and HSV color spaces.

use image::Rgb;


/// Color in the HSV space.
/// Hue is in degrees (0.0 to 360.0), saturation & value are in 0.0 to 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    /// Bring all components back into their valid ranges.
    pub fn clamped(self) -> Self {
        Hsv{
            hue: self.hue.max(0.0).min(360.0),
            saturation: self.saturation.max(0.0).min(1.0),
            value: self.value.max(0.0).min(1.0),
        }
    }
}

impl From<Rgb<u8>> for Hsv {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = [pixel[0] as f32 / 255.0, pixel[1] as f32 / 255.0, pixel[2] as f32 / 255.0];
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv{hue, saturation, value: max}
    }
}

impl From<Hsv> for Rgb<u8> {
    fn from(hsv: Hsv) -> Self {
        let Hsv{hue, saturation, value} = hsv.clamped();
        let chroma = value * saturation;
        let sector = (hue / 60.0) % 6.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = value - chroma;
        let channel = |c: f32| ((c + m) * 255.0).round().max(0.0).min(255.0) as u8;
        Rgb([channel(r), channel(g), channel(b)])
    }
}
