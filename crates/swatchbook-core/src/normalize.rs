//! Best-effort parsing of text typed into the picker's fields.
//!
//! Every path returns `Option<Color>`: `None` means "leave the current
//! color alone". Partial input such as `#4a` or `12, 3` is expected while
//! the user is still typing, so nothing here reports an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl, expand_short_hex, hex_to_rgb};

/// Field value restored when the hex field is committed empty.
pub const DEFAULT_HEX: &str = "#4285f4";

/// Longest accepted run of hex digits.
const MAX_HEX_DIGITS: usize = 6;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{3}){1,2}$").expect("valid regex"));
static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})$").expect("valid regex"));
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3})°?[,\s]*(\d{1,3})%?[,\s]*(\d{1,3})%?").expect("valid regex")
});

/// The three text inputs of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Hex,
    Rgb,
    Hsl,
}

/// Normalize text from the given field.
pub fn normalize(kind: FieldKind, text: &str) -> Option<Color> {
    let color = match kind {
        FieldKind::Hex => normalize_hex(text),
        FieldKind::Rgb => normalize_rgb(text),
        FieldKind::Hsl => normalize_hsl(text),
    };
    if color.is_none() {
        tracing::trace!(field = ?kind, text, "ignoring input that is not a complete color");
    }
    color
}

/// Hex path: tolerate a missing `#` and stray characters, accept 3 or 6
/// digits. Short form is expanded (`#abc` → `#aabbcc`).
pub fn normalize_hex(text: &str) -> Option<Color> {
    let field = sanitize_hex_field(text);
    if !HEX_RE.is_match(&field) {
        return None;
    }

    match expand_short_hex(&field) {
        Some(expanded) => hex_to_rgb(&expanded).ok(),
        None => hex_to_rgb(&field).ok(),
    }
}

/// RGB path: `r, g, b` (or `rgb(r, g, b)`) with every channel in `[0, 255]`.
pub fn normalize_rgb(text: &str) -> Option<Color> {
    let inner = strip_function(text.trim(), "rgb");
    let caps = RGB_RE.captures(inner)?;

    let channel = |i: usize| caps[i].parse::<u16>().ok().and_then(|v| u8::try_from(v).ok());

    Some(Color::new(channel(1)?, channel(2)?, channel(3)?))
}

/// HSL path, producing the canonical color.
pub fn normalize_hsl(text: &str) -> Option<Color> {
    parse_hsl(text).map(Hsl::to_color)
}

/// Parse `h s l` separated by commas and/or spaces, with optional `%` on
/// saturation and lightness. Only the start of the text has to match, so a
/// leading `hsl(` and anything after the lightness are ignored. Requires
/// `h ∈ [0, 360]`, `s, l ∈ [0, 100]`.
pub fn parse_hsl(text: &str) -> Option<Hsl> {
    let text = text.trim();
    let inner = text.strip_prefix("hsl(").map_or(text, str::trim_start);
    let caps = HSL_RE.captures(inner)?;

    let h: u16 = caps[1].parse().ok()?;
    let s: u16 = caps[2].parse().ok()?;
    let l: u16 = caps[3].parse().ok()?;

    if h > 360 || s > 100 || l > 100 {
        return None;
    }

    Some(Hsl::new(f64::from(h), f64::from(s), f64::from(l)))
}

/// What the hex field should display while the user types: a single
/// leading `#` followed by at most six hex digits.
pub fn sanitize_hex_field(text: &str) -> String {
    let body = text.strip_prefix('#').unwrap_or(text);

    let mut field = String::with_capacity(1 + MAX_HEX_DIGITS);
    field.push('#');
    field.extend(
        body.chars()
            .filter(char::is_ascii_hexdigit)
            .take(MAX_HEX_DIGITS),
    );
    field
}

/// What the hex field should display once editing ends.
///
/// A three-digit value is expanded to six digits and an empty field falls
/// back to [`DEFAULT_HEX`]. Anything else is left as typed.
pub fn commit_hex_field(text: &str) -> String {
    let field = sanitize_hex_field(text);
    if field.len() == 1 {
        return DEFAULT_HEX.to_string();
    }
    expand_short_hex(&field).unwrap_or(field)
}

/// `name(inner)` → `inner`; anything else is returned unchanged.
fn strip_function<'a>(text: &'a str, name: &str) -> &'a str {
    text.strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .map(str::trim)
        .unwrap_or(text)
}
