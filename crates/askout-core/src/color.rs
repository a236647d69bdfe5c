//! Card background colors
//!
//! The card background is purely cosmetic. It is white by default, takes an
//! alert tint while the "are you sure?" prompt is pending, and cycles through
//! random pastels while a date is confirmed.

use std::fmt;

use serde::Serialize;

/// Saturation/lightness used for the random pastel backgrounds, in percent
const PASTEL_SATURATION: f32 = 100.0;
const PASTEL_LIGHTNESS: f32 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// `#ffffff`
    #[default]
    Default,
    /// `#ffcccb`
    Alert,
    /// `hsl(hue, 100%, 95%)`
    Pastel { hue: f32 },
}

impl Background {
    /// Pastel background for a hue in degrees; wraps into `[0, 360)`.
    pub fn pastel(hue: f32) -> Self {
        Background::Pastel {
            hue: hue.rem_euclid(360.0),
        }
    }

    /// sRGB components of this background
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Background::Default => (0xff, 0xff, 0xff),
            Background::Alert => (0xff, 0xcc, 0xcb),
            Background::Pastel { hue } => hsl_to_rgb(hue, PASTEL_SATURATION, PASTEL_LIGHTNESS),
        }
    }

    /// CSS-style representation, as the card would be styled in a browser
    pub fn css(&self) -> String {
        match *self {
            Background::Default => "#ffffff".to_string(),
            Background::Alert => "#ffcccb".to_string(),
            Background::Pastel { hue } => format!("hsl({hue:.0}, 100%, 95%)"),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Convert HSL (hue in degrees, saturation/lightness in percent) to sRGB.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_byte(l);
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_backgrounds() {
        assert_eq!(Background::Default.rgb(), (255, 255, 255));
        assert_eq!(Background::Alert.rgb(), (255, 204, 203));
        assert_eq!(Background::Default.css(), "#ffffff");
        assert_eq!(Background::Alert.css(), "#ffcccb");
    }

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    }

    #[test]
    fn test_hsl_greyscale() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.0), (128, 128, 128));
    }

    #[test]
    fn test_pastel_is_light() {
        for hue in [0.0, 45.0, 137.5, 300.0, 359.9] {
            let (r, g, b) = Background::pastel(hue).rgb();
            assert!(
                r >= 229 && g >= 229 && b >= 229,
                "hue {hue} gave ({r},{g},{b})"
            );
        }
    }

    #[test]
    fn test_pastel_hue_wraps() {
        assert_eq!(Background::pastel(370.0), Background::Pastel { hue: 10.0 });
        assert_eq!(Background::pastel(-90.0).css(), "hsl(270, 100%, 95%)");
    }

    #[test]
    fn test_pastel_css() {
        assert_eq!(Background::pastel(210.4).css(), "hsl(210, 100%, 95%)");
    }
}
