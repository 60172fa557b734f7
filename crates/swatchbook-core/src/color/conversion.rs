//! RGB ↔ HSL ↔ HEX conversions.
//!
//! # HSL model
//! Hue is circular in degrees `[0, 360)`, saturation and lightness are
//! percentages `[0, 100]`. The forward conversion keeps full precision;
//! rounding only happens when values are formatted for display.
//!
//! ```text
//!   max = max(r, g, b)      min = min(r, g, b)      d = max − min
//!   l = (max + min) / 2
//!   s = d / (2 − max − min)   if l > 0.5
//!       d / (max + min)       otherwise
//!   h = 60 × { (g − b)/d mod 6   max = r
//!            { (b − r)/d + 2     max = g
//!            { (r − g)/d + 4     max = b
//! ```
//!
//! The reverse conversion uses the two-anchor `(p, q)` form evaluated at
//! hue offsets `h + 1/3`, `h`, `h − 1/3` for R, G and B. Because channels
//! are rounded to integers, `hsl_to_rgb(rgb_to_hsl(c))` reproduces `c`
//! within ±1 per channel.

use super::model::{Color, Hsl};
use crate::error::{ColorError, Result};

/// Convert 8-bit RGB to HSL (degrees / percent, unrounded).
///
/// Achromatic input (`r == g == b`) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let mut h = sector / 6.0 * 360.0;
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsl::new(h, s * 100.0, l * 100.0)
}

/// Convert fractional HSL (each component in `[0, 1]`) to 8-bit RGB.
///
/// Callers holding degrees/percent divide by 360 and 100 first, or use
/// [`Hsl::to_color`]. Out-of-range inputs are not rejected; the resulting
/// channels are clamped to `[0, 255]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    if s == 0.0 {
        let v = to_channel(l);
        return Color::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise hue ramp between the `p` and `q` anchors.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Format RGB as `#rrggbb` (lowercase, zero-padded).
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse a strict `#RRGGBB` string (either case).
///
/// Short `#RGB` input is rejected; run it through [`expand_short_hex`]
/// first.
pub fn hex_to_rgb(hex: &str) -> Result<Color> {
    let invalid = || ColorError::InvalidHex(hex.to_string());

    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(invalid)?;

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Expand a `#RGB` short form to `#RRGGBB` by duplicating each digit.
///
/// Returns `None` unless the input is exactly `#` followed by three hex digits.
pub fn expand_short_hex(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_hsl_close(actual: Hsl, expected: (f64, f64, f64), tol: f64) {
        let pairs = [
            (actual.h, expected.0, "h"),
            (actual.s, expected.1, "s"),
            (actual.l, expected.2, "l"),
        ];
        for (a, e, name) in pairs {
            assert!(
                (a - e).abs() <= tol,
                "{name}: got {a:.6}, expected {e:.6} (tol {tol})"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_reference_color() {
        assert_eq!(rgb_to_hex(66, 133, 244), "#4285f4");
    }

    #[test]
    fn test_rgb_to_hex_zero_pads_channels() {
        assert_eq!(rgb_to_hex(0, 5, 15), "#00050f");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
    }

    #[test]
    fn test_hex_to_rgb_accepts_both_cases() {
        assert_eq!(hex_to_rgb("#4285f4"), Ok(Color::new(66, 133, 244)));
        assert_eq!(hex_to_rgb("#4285F4"), Ok(Color::new(66, 133, 244)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        for bad in ["4285f4", "#abc", "#4285f", "#4285f4a", "#zz85f4", "", "#"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_to_rgb_rejects_multibyte_without_panicking() {
        assert!(hex_to_rgb("#ééé").is_err());
    }

    #[test]
    fn test_expand_short_hex() {
        assert_eq!(expand_short_hex("#abc").as_deref(), Some("#aabbcc"));
        assert_eq!(expand_short_hex("#F0a").as_deref(), Some("#FF00aa"));
        assert_eq!(expand_short_hex("#abcd"), None);
        assert_eq!(expand_short_hex("abc"), None);
        assert_eq!(expand_short_hex("#xyz"), None);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic_gray() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_hsl_close(hsl, (0.0, 0.0, 128.0 / 255.0 * 100.0), EPSILON);
        assert!((hsl.l - 50.2).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_hsl_close(rgb_to_hsl(255, 0, 0), (0.0, 100.0, 50.0), EPSILON);
        assert_hsl_close(rgb_to_hsl(0, 255, 0), (120.0, 100.0, 50.0), EPSILON);
        assert_hsl_close(rgb_to_hsl(0, 0, 255), (240.0, 100.0, 50.0), EPSILON);
    }

    #[test]
    fn test_rgb_to_hsl_red_max_with_blue_above_green_wraps() {
        // Magenta-ish red: max = r, g < b puts the hue in the last sector.
        let hsl = rgb_to_hsl(255, 0, 128);
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {} not in [300, 360)", hsl.h);
    }

    #[test]
    fn test_rgb_to_hsl_reference_color() {
        let hsl = rgb_to_hsl(66, 133, 244);
        assert_eq!(hsl.h.round(), 217.0);
        assert_eq!(hsl.s.round(), 89.0);
        assert_eq!(hsl.l.round(), 61.0);
    }

    #[test]
    fn test_hsl_to_rgb_216_50_50() {
        // 216°: the hue sits between cyan and blue, so G = p + (q − p)·0.4.
        let c = hsl_to_rgb(0.6, 0.5, 0.5);
        assert_eq!(c, Color::new(64, 115, 191));
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), Color::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Color::new(0, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Color::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_to_rgb_full_turn_matches_zero() {
        assert_eq!(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_clamps_out_of_range() {
        let c = hsl_to_rgb(0.0, 0.0, 1.5);
        assert_eq!(c, Color::new(255, 255, 255));
    }

    #[test]
    fn test_round_trip_within_one() {
        for &(r, g, b) in &[(66, 133, 244), (1, 2, 3), (250, 10, 128), (17, 200, 17)] {
            let hsl = rgb_to_hsl(r, g, b);
            let back = hsl_to_rgb(hsl.h / 360.0, hsl.s / 100.0, hsl.l / 100.0);
            for (a, e) in [(back.r, r), (back.g, g), (back.b, b)] {
                assert!(a.abs_diff(e) <= 1, "({r},{g},{b}) -> {back:?}");
            }
        }
    }
}
