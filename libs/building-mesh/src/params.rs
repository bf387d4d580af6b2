//! # Shape Parameters
//!
//! Raw user input and the normalized parameter set consumed by the
//! builders. Normalization never fails: missing or non-finite values are
//! replaced with defaults and the side count is clamped.

use config::constants::{
    ParamLimits, DEFAULT_BASE_RADIUS, DEFAULT_HEIGHT, DEFAULT_SIDES, DEFAULT_TOP_RADIUS,
};
use tracing::trace;

/// Un-normalized shape input. Any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawShapeParams {
    /// Requested side count (fractional values are truncated)
    pub sides: Option<f64>,
    /// Requested height
    pub height: Option<f64>,
    /// Requested bottom rim radius
    pub base_radius: Option<f64>,
    /// Requested top rim radius
    pub top_radius: Option<f64>,
}

/// Normalized shape parameters.
///
/// `sides` is always within the configured limits; the other fields are
/// always finite but otherwise unrestricted (zero or negative radii are
/// accepted and produce degenerate geometry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Number of sides around the Y axis
    pub sides: u32,
    /// Height of the top cap plane
    pub height: f64,
    /// Radius of the bottom rim
    pub base_radius: f64,
    /// Radius of the top rim
    pub top_radius: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            height: DEFAULT_HEIGHT,
            base_radius: DEFAULT_BASE_RADIUS,
            top_radius: DEFAULT_TOP_RADIUS,
        }
    }
}

impl ShapeParams {
    /// Normalizes raw input with the default side limits.
    pub fn from_raw(raw: &RawShapeParams) -> Self {
        raw.normalize()
    }
}

impl RawShapeParams {
    /// Creates raw parameters with every field present.
    pub fn new(sides: f64, height: f64, base_radius: f64, top_radius: f64) -> Self {
        Self {
            sides: Some(sides),
            height: Some(height),
            base_radius: Some(base_radius),
            top_radius: Some(top_radius),
        }
    }

    /// Parses up to four positional arguments in order: sides, height,
    /// base radius, top radius.
    ///
    /// Each argument contributes its leading number and ignores any
    /// trailing text: the side count reads an integer prefix (`"12abc"` is
    /// 12, `"1e3"` is 1), the other values read a decimal prefix with an
    /// optional exponent. Arguments with no leading number become `None`.
    /// Extra arguments are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use building_mesh::RawShapeParams;
    ///
    /// let raw = RawShapeParams::from_args(["12", "tall"]);
    /// assert_eq!(raw.sides, Some(12.0));
    /// assert_eq!(raw.height, None);
    /// assert_eq!(raw.top_radius, None);
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let mut next = |parse: fn(&str) -> Option<f64>| {
            args.next().and_then(|arg| parse(arg.as_ref()))
        };

        Self {
            sides: next(leading_integer),
            height: next(leading_decimal),
            base_radius: next(leading_decimal),
            top_radius: next(leading_decimal),
        }
    }

    /// Normalizes with the default side limits (3..=36).
    pub fn normalize(&self) -> ShapeParams {
        self.normalize_with(&ParamLimits::default())
    }

    /// Normalizes with explicit side limits.
    pub fn normalize_with(&self, limits: &ParamLimits) -> ShapeParams {
        let sides = match finite(self.sides) {
            Some(value) => limits.clamp_sides(value.trunc() as i64),
            None => {
                trace!(default = DEFAULT_SIDES, "sides missing or non-finite");
                limits.clamp_sides(i64::from(DEFAULT_SIDES))
            }
        };

        ShapeParams {
            sides,
            height: or_default(self.height, DEFAULT_HEIGHT, "height"),
            base_radius: or_default(self.base_radius, DEFAULT_BASE_RADIUS, "base_radius"),
            top_radius: or_default(self.top_radius, DEFAULT_TOP_RADIUS, "top_radius"),
        }
    }
}

/// Reads an optionally signed run of ASCII digits at the start of `text`.
fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let start = sign_len(bytes);
    let end = start + digit_run(&bytes[start..]);
    if end == start {
        return None;
    }
    text[..end].parse().ok()
}

/// Reads the longest decimal literal at the start of `text`: sign, digits,
/// optional fraction, optional exponent. `Infinity` reads as infinite.
fn leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = sign_len(bytes);

    if text[sign..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let whole = digit_run(&bytes[sign..]);
    let mut end = sign + whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digit_run(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn or_default(value: Option<f64>, default: f64, name: &str) -> f64 {
    finite(value).unwrap_or_else(|| {
        trace!(param = name, default, "value missing or non-finite");
        default
    })
}
