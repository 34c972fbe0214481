//! printf-style format templates
//!
//! A template is literal text with `%` directives:
//!
//! ```text
//! %[flags][width][.precision]verb
//! ```
//!
//! Flags are `-` (left-justify), `+` (always print a sign), `0` (pad numbers
//! with zeros) and ` ` (leave a space where a plus sign would go). `%%` is a
//! literal percent sign.
//!
//! Widths and precisions above [`MAX_WIDTH`] make the directive malformed.

/// Largest width or precision a directive may carry
pub const MAX_WIDTH: usize = 10_000;

/// A formatting verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `%d` decimal integer
    Decimal,
    /// `%x` / `%X` hexadecimal integer
    Hex { upper: bool },
    /// `%o` octal integer
    Octal,
    /// `%b` binary integer
    Binary,
    /// `%f` / `%F` fixed-point
    Fixed,
    /// `%e` / `%E` scientific notation
    Exponent { upper: bool },
    /// `%g` / `%G` shortest of fixed or scientific
    General { upper: bool },
    /// `%s` string form
    Str,
    /// `%v` default form
    Value,
    /// `%q` double-quoted string form
    Quoted,
}

impl Verb {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Verb::Decimal,
            'x' => Verb::Hex { upper: false },
            'X' => Verb::Hex { upper: true },
            'o' => Verb::Octal,
            'b' => Verb::Binary,
            'f' | 'F' => Verb::Fixed,
            'e' => Verb::Exponent { upper: false },
            'E' => Verb::Exponent { upper: true },
            'g' => Verb::General { upper: false },
            'G' => Verb::General { upper: true },
            's' => Verb::Str,
            'v' => Verb::Value,
            'q' => Verb::Quoted,
            _ => return None,
        })
    }

    /// Whether this verb produces a number (sign and zero-padding apply)
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Verb::Str | Verb::Value | Verb::Quoted)
    }
}

/// Flags that precede the width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub left: bool,
    pub plus: bool,
    pub zero: bool,
    pub space: bool,
}

/// One parsed `%` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub verb: Verb,
}

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is
    Literal(String),
    /// A directive that consumes the cell value
    Directive(Directive),
    /// A `%` sequence that is not a valid directive; rendered verbatim
    Malformed(String),
}

/// Split a template into literal text and directives
pub fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        if let Some((_, '%')) = chars.peek() {
            chars.next();
            literal.push('%');
            continue;
        }

        let mut flags = Flags::default();
        while let Some(&(_, f)) = chars.peek() {
            match f {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                '0' => flags.zero = true,
                ' ' => flags.space = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_number(&mut chars);
        let precision = if let Some((_, '.')) = chars.peek() {
            chars.next();
            Some(take_number(&mut chars).unwrap_or(0))
        } else {
            None
        };

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }

        let Some((_, v)) = chars.next() else {
            segments.push(Segment::Malformed(template[start..].to_string()));
            break;
        };
        let in_bounds = width.max(precision).map_or(true, |n| n <= MAX_WIDTH);
        match Verb::from_char(v) {
            Some(verb) if in_bounds => segments.push(Segment::Directive(Directive {
                flags,
                width,
                precision,
                verb,
            })),
            _ => {
                let end = chars.peek().map(|&(i, _)| i).unwrap_or(template.len());
                segments.push(Segment::Malformed(template[start..end].to_string()));
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

fn take_number<I>(chars: &mut std::iter::Peekable<I>) -> Option<usize>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn directive(verb: Verb) -> Directive {
        Directive {
            flags: Flags::default(),
            width: None,
            precision: None,
            verb,
        }
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(parse("plain"), vec![Segment::Literal("plain".into())]);
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("100%%"), vec![Segment::Literal("100%".into())]);
    }

    #[test]
    fn test_simple_directive() {
        assert_eq!(
            parse("n=%d"),
            vec![
                Segment::Literal("n=".into()),
                Segment::Directive(directive(Verb::Decimal)),
            ]
        );
    }

    #[test]
    fn test_flags_width_precision() {
        let segments = parse("[%-08.3f]");
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            Segment::Directive(Directive {
                flags: Flags {
                    left: true,
                    zero: true,
                    ..Flags::default()
                },
                width: Some(8),
                precision: Some(3),
                verb: Verb::Fixed,
            })
        );
    }

    #[test]
    fn test_bare_precision_is_zero() {
        let segments = parse("%.f");
        assert_eq!(
            segments,
            vec![Segment::Directive(Directive {
                precision: Some(0),
                ..directive(Verb::Fixed)
            })]
        );
    }

    #[test]
    fn test_malformed_directives() {
        assert_eq!(
            parse("a%zb"),
            vec![
                Segment::Literal("a".into()),
                Segment::Malformed("%z".into()),
                Segment::Literal("b".into()),
            ]
        );
        assert_eq!(
            parse("tail %5"),
            vec![
                Segment::Literal("tail ".into()),
                Segment::Malformed("%5".into()),
            ]
        );
    }

    #[test]
    fn test_flags_without_verb() {
        assert_eq!(parse("%-"), vec![Segment::Malformed("%-".into())]);
        assert_eq!(
            parse("x%+0 "),
            vec![
                Segment::Literal("x".into()),
                Segment::Malformed("%+0 ".into()),
            ]
        );
    }

    #[test]
    fn test_oversized_width_and_precision() {
        assert_eq!(
            parse("%99999999999999999999d!"),
            vec![
                Segment::Malformed("%99999999999999999999d".into()),
                Segment::Literal("!".into()),
            ]
        );
        assert_eq!(parse("%.70000f"), vec![Segment::Malformed("%.70000f".into())]);
        assert_eq!(
            parse("%10000.10000e"),
            vec![Segment::Directive(Directive {
                width: Some(MAX_WIDTH),
                precision: Some(MAX_WIDTH),
                ..directive(Verb::Exponent { upper: false })
            })]
        );
    }

    #[test]
    fn test_multibyte_literal() {
        assert_eq!(
            parse("€%sé"),
            vec![
                Segment::Literal("€".into()),
                Segment::Directive(directive(Verb::Str)),
                Segment::Literal("é".into()),
            ]
        );
    }
}
