//! Aisle badge color resolution.
//!
//! Each suggestion row renders its aisle as a colored badge. The background
//! comes from the caller's aisle-color map when it holds a valid hex value
//! for the aisle's display name, else from a static default table keyed by
//! the aisle's English name, else a neutral gray. Text color is picked for
//! contrast against the background, and the border is the background at
//! reduced alpha. Resolution is total: malformed or missing input always
//! degrades to a usable triple, never an error.

use std::collections::HashMap;

/// Mapping from an aisle display name (localized or English) to a hex color,
/// as produced by the caller's aisle-management UI. May contain gaps or
/// malformed values; both fall through to the defaults.
pub type AisleColorMap = HashMap<String, String>;

/// Neutral background used when no color can be resolved for an aisle.
pub const NEUTRAL_BADGE_COLOR: &str = "#9e9e9e";

/// Text color paired with dark badge backgrounds.
const LIGHT_TEXT: &str = "#ffffff";

/// Text color paired with light badge backgrounds.
const DARK_TEXT: &str = "#212121";

/// Alpha applied to the background color for the badge border.
const BORDER_ALPHA: f32 = 0.45;

/// Fallback badge backgrounds by English aisle name.
///
/// Owned by this crate as a last resort before the neutral gray; the
/// caller's color map always takes precedence.
pub const DEFAULT_AISLE_COLORS: &[(&str, &str)] = &[
    ("Produce", "#4caf50"),
    ("Dairy", "#90caf9"),
    ("Bakery", "#d7a86e"),
    ("Meat", "#ef5350"),
    ("Seafood", "#4dd0e1"),
    ("Frozen", "#81d4fa"),
    ("Pantry", "#ffb74d"),
    ("Beverages", "#9575cd"),
    ("Snacks", "#f06292"),
    ("Household", "#a1887f"),
    ("Personal Care", "#ba68c8"),
    ("Other", "#b0bec5"),
];

/// The resolved color triple for an aisle badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeColors {
    /// Badge background, a hex string.
    pub background: String,
    /// Badge text color, light or dark for contrast with the background.
    pub text: String,
    /// Badge border, the background at reduced alpha (`rgba(...)`).
    pub border: String,
}

/// Resolve the badge color triple for an aisle.
///
/// Resolution order for the background:
/// 1. the color map's value for `display_aisle`, when present and valid hex
///    (`#rgb` or `#rrggbb`, surrounding whitespace tolerated);
/// 2. [`DEFAULT_AISLE_COLORS`] by `english_aisle` (ASCII-case-insensitive);
/// 3. [`NEUTRAL_BADGE_COLOR`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use suggestrank::resolve_badge_colors;
///
/// let mut map = HashMap::new();
/// map.insert("L\u{00E1}cteos".to_owned(), "#90caf9".to_owned());
///
/// let colors = resolve_badge_colors(Some("L\u{00E1}cteos"), &map, Some("Dairy"));
/// assert_eq!(colors.background, "#90caf9");
/// assert_eq!(colors.border, "rgba(144, 202, 249, 0.45)");
/// ```
pub fn resolve_badge_colors(
    display_aisle: Option<&str>,
    color_map: &AisleColorMap,
    english_aisle: Option<&str>,
) -> BadgeColors {
    let background = display_aisle
        .and_then(|name| color_map.get(name))
        .map(|value| value.trim())
        .filter(|value| is_valid_hex(value))
        .map(str::to_owned)
        .or_else(|| english_aisle.and_then(default_aisle_color).map(str::to_owned))
        .unwrap_or_else(|| NEUTRAL_BADGE_COLOR.to_owned());

    let (r, g, b) = parse_hex(&background).unwrap_or((158, 158, 158));

    BadgeColors {
        text: contrast_text(r, g, b).to_owned(),
        border: format!("rgba({r}, {g}, {b}, {BORDER_ALPHA})"),
        background,
    }
}

/// The static default background for an English aisle name, if the table
/// has one. Lookup is ASCII-case-insensitive.
pub fn default_aisle_color(english_name: &str) -> Option<&'static str> {
    DEFAULT_AISLE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(english_name))
        .map(|&(_, color)| color)
}

/// Whether `value` is a `#rgb` or `#rrggbb` hex color.
fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a `#rgb` or `#rrggbb` hex color into its channel values.
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    let expand = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match digits.len() {
        3 => {
            let mut channels = digits.chars().map(|c| {
                // "#abc" is shorthand for "#aabbcc".
                expand(&format!("{c}{c}"))
            });
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        6 => Some((
            expand(&digits[0..2])?,
            expand(&digits[2..4])?,
            expand(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// Pick a light or dark text color for contrast against a background.
///
/// Uses the perceived-luminance weighting (0.299 R + 0.587 G + 0.114 B):
/// dark text on light backgrounds, light text on dark ones.
fn contrast_text(r: u8, g: u8, b: u8) -> &'static str {
    let luminance = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luminance > 150.0 { DARK_TEXT } else { LIGHT_TEXT }
}
