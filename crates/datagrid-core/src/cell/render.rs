//! Rendering cell values to display strings
//!
//! Rendering never fails. When a template does not fit the value, or the
//! value has no textual form, the best available text is returned and the
//! result is marked as degraded so callers can detect lossy output.

use super::template::{self, Directive, Segment, Verb};
use super::CellValue;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Default precision for `%f` and `%e`
const DEFAULT_PRECISION: usize = 6;

/// Most fractional digits a `Decimal` can carry
const DECIMAL_MAX_SCALE: u32 = 28;

/// Text produced by rendering a cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    /// The display text
    pub text: String,
    /// True if the text is a best-effort substitute (template/value mismatch,
    /// unsupported value, serialization failure)
    pub degraded: bool,
}

impl Rendered {
    /// Text rendered exactly as requested
    pub fn exact<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            degraded: false,
        }
    }

    /// Best-effort text
    pub fn degraded<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            degraded: true,
        }
    }

    /// Consume into the display text
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Rendered> for String {
    fn from(r: Rendered) -> Self {
        r.text
    }
}

/// Render a value with a template, or with the type default when `format`
/// is empty
pub fn render(value: &CellValue, format: &str) -> Rendered {
    let rendered = if format.is_empty() {
        render_default(value)
    } else {
        render_template(value, format)
    };

    if rendered.degraded {
        log::debug!(
            "degraded render of {} value with format {:?}: {:?}",
            value.type_name(),
            format,
            rendered.text
        );
    }

    rendered
}

/// Type-driven default rendering
pub fn render_default(value: &CellValue) -> Rendered {
    match natural_text(value) {
        Some(text) => Rendered::exact(text),
        None => Rendered::degraded(String::new()),
    }
}

/// The default text of a value, or `None` if it has none
///
/// Integers print in decimal, floats in the shortest form that round-trips
/// (switching to exponent notation for very large or very small magnitudes),
/// timestamps through their own `Display`, mappings and sequences as compact
/// JSON, and decimals in their exact literal form.
fn natural_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Empty => Some(String::new()),
        CellValue::Integer(n) => Some(n.to_string()),
        CellValue::Float(x) => Some(float_text(*x)),
        CellValue::Text(s) => Some(s.clone()),
        CellValue::Timestamp(ts) => Some(ts.to_string()),
        CellValue::Mapping(map) => serde_json::to_string(map).ok(),
        CellValue::Sequence(items) => serde_json::to_string(items).ok(),
        CellValue::Decimal(d) => Some(d.to_string()),
        CellValue::Unsupported(_) => None,
    }
}

fn float_text(x: f64) -> String {
    let abs = x.abs();
    if x.is_finite() && abs != 0.0 && !(1e-4..1e21).contains(&abs) {
        format!("{x:e}")
    } else {
        x.to_string()
    }
}

fn render_template(value: &CellValue, format: &str) -> Rendered {
    let mut out = String::new();
    let mut degraded = false;
    let mut consumed = false;

    for segment in template::parse(format) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Malformed(text) => {
                out.push_str(&text);
                degraded = true;
            }
            // there is only one value to substitute
            Segment::Directive(_) if consumed => degraded = true,
            Segment::Directive(directive) => {
                consumed = true;
                match apply(&directive, value) {
                    Some(piece) => out.push_str(&pad(piece, &directive)),
                    None => {
                        degraded = true;
                        let fallback = natural_text(value).unwrap_or_default();
                        out.push_str(&pad(Piece::Text(fallback), &directive));
                    }
                }
            }
        }
    }

    if !consumed && !value.is_empty() {
        degraded = true;
    }

    Rendered {
        text: out,
        degraded,
    }
}

/// Formatted text before width and sign handling
enum Piece {
    Number { negative: bool, body: String },
    Text(String),
}

/// Format a value for one directive; `None` means the verb does not fit
fn apply(directive: &Directive, value: &CellValue) -> Option<Piece> {
    let precision = directive.precision;

    match directive.verb {
        Verb::Str | Verb::Value => {
            natural_text(value).map(|text| Piece::Text(truncate(text, precision)))
        }
        Verb::Quoted => {
            natural_text(value).map(|text| Piece::Text(quote(&truncate(text, precision))))
        }
        Verb::Decimal | Verb::Hex { .. } | Verb::Octal | Verb::Binary => {
            let n = match value {
                CellValue::Integer(n) => *n,
                CellValue::Decimal(d) if directive.verb == Verb::Decimal => {
                    return integral_decimal(*d).map(|body| Piece::Number {
                        negative: d.is_sign_negative() && !d.is_zero(),
                        body: min_digits(body, precision),
                    })
                }
                _ => return None,
            };
            let magnitude = n.unsigned_abs();
            let body = match directive.verb {
                Verb::Hex { upper: false } => format!("{magnitude:x}"),
                Verb::Hex { upper: true } => format!("{magnitude:X}"),
                Verb::Octal => format!("{magnitude:o}"),
                Verb::Binary => format!("{magnitude:b}"),
                _ => magnitude.to_string(),
            };
            Some(Piece::Number {
                negative: n < 0,
                body: min_digits(body, precision),
            })
        }
        Verb::Fixed => match value {
            CellValue::Decimal(d) => {
                Some(fixed_decimal(*d, precision.unwrap_or(DEFAULT_PRECISION)))
            }
            CellValue::Integer(_) | CellValue::Float(_) => {
                let x = value.as_float()?;
                Some(float_piece(x, |abs| {
                    format!("{:.*}", precision.unwrap_or(DEFAULT_PRECISION), abs)
                }))
            }
            _ => None,
        },
        Verb::Exponent { upper } => {
            let x = numeric(value)?;
            Some(float_piece(x, |abs| {
                exponent_form(abs, precision.unwrap_or(DEFAULT_PRECISION), upper)
            }))
        }
        Verb::General { upper } => {
            let x = numeric(value)?;
            Some(float_piece(x, |abs| match precision {
                Some(p) => general_form(abs, p, upper),
                None if upper => float_text(abs).to_uppercase(),
                None => float_text(abs),
            }))
        }
    }
}

fn numeric(value: &CellValue) -> Option<f64> {
    if value.is_numeric() {
        value.as_float()
    } else {
        None
    }
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(p) if text.chars().count() > p => text.chars().take(p).collect(),
        _ => text,
    }
}

fn min_digits(body: String, precision: Option<usize>) -> String {
    match precision {
        Some(p) if body.len() < p => format!("{}{}", "0".repeat(p - body.len()), body),
        _ => body,
    }
}

/// The digits of a decimal with no fractional part, without sign
fn integral_decimal(d: Decimal) -> Option<String> {
    if d.fract().is_zero() {
        Some(d.abs().normalize().to_string())
    } else {
        None
    }
}

/// `%f` on a decimal; digits past what the decimal can hold are zeros
fn fixed_decimal(d: Decimal, precision: usize) -> Piece {
    let dp = u32::try_from(precision)
        .unwrap_or(u32::MAX)
        .min(DECIMAL_MAX_SCALE);
    let mut rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);

    let mut body = rounded.abs().to_string();
    let scale = rounded.scale() as usize;
    if precision > scale {
        if scale == 0 {
            body.push('.');
        }
        body.push_str(&"0".repeat(precision - scale));
    }

    Piece::Number {
        negative: rounded.is_sign_negative() && !rounded.is_zero(),
        body,
    }
}

/// Format a float through `body` applied to its magnitude
fn float_piece(x: f64, body: impl FnOnce(f64) -> String) -> Piece {
    if !x.is_finite() {
        return Piece::Number {
            negative: x.is_sign_negative() && x.is_infinite(),
            body: if x.is_nan() { "NaN".into() } else { "inf".into() },
        };
    }
    Piece::Number {
        negative: x.is_sign_negative(),
        body: body(x.abs()),
    }
}

/// `1.500000e+02` style: signed exponent with at least two digits
fn exponent_form(x: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{x:.precision$e}");
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

/// `%g` with an explicit number of significant digits
fn general_form(x: f64, precision: usize, upper: bool) -> String {
    let p = precision.max(1);
    if x == 0.0 {
        return "0".into();
    }

    let probe = format!("{:.*e}", p - 1, x);
    let exp: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exp < -4 || exp >= p as i32 {
        let full = exponent_form(x, p - 1, upper);
        let split = full.find(['e', 'E']).unwrap_or(full.len());
        let (mantissa, tail) = full.split_at(split);
        format!("{}{}", trim_fraction(mantissa), tail)
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}

/// Double-quote text with escapes such as `\n`, `\x1b` and `\u200b`
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if (c as u32) < 0x80 && c.is_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() || is_invisible(c) => match c as u32 {
                n if n <= 0xFFFF => out.push_str(&format!("\\u{n:04x}")),
                n => out.push_str(&format!("\\U{n:08x}")),
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format and separator characters with no visible glyph
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{200b}'..='\u{200f}'
            | '\u{2028}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{feff}'
    )
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Apply sign flags and width
fn pad(piece: Piece, directive: &Directive) -> String {
    let flags = directive.flags;

    let (sign, body, zero_ok) = match piece {
        Piece::Number { negative, body } => {
            let sign = if negative {
                "-"
            } else if flags.plus {
                "+"
            } else if flags.space {
                " "
            } else {
                ""
            };
            let zero_ok = body.starts_with(|c: char| c.is_ascii_digit());
            (sign, body, zero_ok)
        }
        Piece::Text(text) => ("", text, false),
    };

    let len = sign.len() + body.chars().count();
    let width = directive.width.unwrap_or(0);
    if len >= width {
        return format!("{sign}{body}");
    }

    let fill = width - len;
    if flags.left {
        format!("{sign}{body}{}", " ".repeat(fill))
    } else if flags.zero && zero_ok && directive.verb.is_numeric() {
        format!("{sign}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{sign}{body}", " ".repeat(fill))
    }
}
