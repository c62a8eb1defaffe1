//! WCAG color contrast math: relative luminance, contrast ratio, and
//! conformance rating. Shared by the contrast CLI tool and the heuristic
//! contrast check.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-digit hex color, with or without a leading `#`.
    /// Returns None for anything else (shorthand, named colors, garbage).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Relative luminance per the WCAG definition: gamma-corrected sRGB
    /// channels weighted 0.2126 / 0.7152 / 0.0722.
    pub fn luminance(&self) -> f64 {
        let channels = [self.r, self.g, self.b].map(|c| {
            let v = c as f64 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        channels[0] * 0.2126 + channels[1] * 0.7152 + channels[2] * 0.0722
    }
}

/// WCAG conformance rating for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl ContrastRating {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ContrastRating::Aaa
        } else if ratio >= 4.5 {
            ContrastRating::Aa
        } else if ratio >= 3.0 {
            ContrastRating::AaLarge
        } else {
            ContrastRating::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastRating::Aaa => "AAA",
            ContrastRating::Aa => "AA",
            ContrastRating::AaLarge => "AA Large",
            ContrastRating::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio between two colors, rounded to two decimal places.
/// Always >= 1.0; order of arguments does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let ratio = (la.max(lb) + 0.05) / (la.min(lb) + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// Parse two hex colors and compute their contrast ratio.
/// None if either color is malformed.
pub fn contrast_ratio_hex(fg: &str, bg: &str) -> Option<f64> {
    Some(contrast_ratio(Rgb::from_hex(fg)?, Rgb::from_hex(bg)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#FFFFFF"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::from_hex("000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(Rgb::from_hex("#1a2B3c"), Some(Rgb { r: 26, g: 43, b: 60 }));
    }

    #[test]
    fn test_malformed_hex_is_none() {
        assert!(Rgb::from_hex("#fff").is_none());
        assert!(Rgb::from_hex("red").is_none());
        assert!(Rgb::from_hex("#gggggg").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast_ratio_hex("#000000", "#FFFFFF").unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
        assert_eq!(ContrastRating::from_ratio(ratio), ContrastRating::Aaa);
    }

    #[test]
    fn test_close_grays_fail() {
        let ratio = contrast_ratio_hex("#777777", "#888888").unwrap();
        assert!(ratio < 3.0);
        assert_eq!(ContrastRating::from_ratio(ratio), ContrastRating::Fail);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = contrast_ratio_hex("#123456", "#fedcba").unwrap();
        let b = contrast_ratio_hex("#fedcba", "#123456").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(ContrastRating::from_ratio(7.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(4.5), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(3.0), ContrastRating::AaLarge);
        assert_eq!(ContrastRating::from_ratio(2.99), ContrastRating::Fail);
    }

    #[test]
    fn test_rating_serializes_display_names() {
        assert_eq!(serde_json::to_string(&ContrastRating::AaLarge).unwrap(), "\"AA Large\"");
    }
}
