//! printf-style message formatting
//!
//! Messages are templates with positional `%` placeholders, expanded from a
//! slice of [`FormatArg`]s. Supported: flags `-+ #0`, width, precision and the
//! conversions `s q d i u c x X o e E f F g G %`. Width and precision take at
//! most two digits. `%q` quotes a string with decimal escapes for control
//! bytes (`"\27[0m"`), so the result can be read back as a literal.

use std::fmt;

use crate::error::{LoggerError, Result};

/// A positional argument for a message template
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Nil,
}

impl FormatArg {
    /// The argument as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormatArg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FormatArg::Str(_) => "string",
            FormatArg::Int(_) => "integer",
            FormatArg::Float(_) => "number",
            FormatArg::Bool(_) => "boolean",
            FormatArg::Nil => "nil",
        }
    }

    fn to_integer(&self) -> Option<i64> {
        match self {
            FormatArg::Int(n) => Some(*n),
            FormatArg::Float(f) => float_to_integer(*f),
            FormatArg::Str(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
            _ => None,
        }
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            FormatArg::Int(n) => Some(*n as f64),
            FormatArg::Float(f) => Some(*f),
            FormatArg::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Integral floats inside the i64 range; everything else has no integer form
fn float_to_integer(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Int(n) => write!(f, "{}", n),
            FormatArg::Float(v) => write!(f, "{}", v),
            FormatArg::Bool(b) => write!(f, "{}", b),
            FormatArg::Nil => f.write_str("nil"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::Str(s.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::Str(s)
    }
}

impl From<&String> for FormatArg {
    fn from(s: &String) -> Self {
        FormatArg::Str(s.clone())
    }
}

macro_rules! int_arg {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatArg {
            fn from(n: $t) -> Self {
                FormatArg::Int(n as i64)
            }
        })*
    };
}

int_arg!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for FormatArg {
    fn from(v: f32) -> Self {
        FormatArg::Float(v.into())
    }
}

impl From<f64> for FormatArg {
    fn from(v: f64) -> Self {
        FormatArg::Float(v)
    }
}

impl From<bool> for FormatArg {
    fn from(b: bool) -> Self {
        FormatArg::Bool(b)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FormatArg::Nil)
    }
}

/// Build a `Vec<FormatArg>` from heterogeneous values
#[macro_export]
macro_rules! fmt_args {
    () => {
        ::std::vec::Vec::<$crate::FormatArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::FormatArg::from($arg)),+]
    };
}

#[derive(Debug, Default)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    alt: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

/// Expand `template` with `args`
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '#' => spec.alt = true,
                '0' => spec.zero = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = read_number(&mut chars)?.unwrap_or(0);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(read_number(&mut chars)?.unwrap_or(0));
        }

        let conversion = chars
            .next()
            .ok_or_else(|| LoggerError::Format("incomplete conversion at end of template".into()))?;

        let position = next_arg + 1;
        let arg = args.get(next_arg).ok_or_else(|| {
            LoggerError::Format(format!("bad argument #{} (no value)", position))
        })?;
        next_arg += 1;

        let piece = convert(conversion, &spec, arg, position)?;
        out.push_str(&piece);
    }

    Ok(out)
}

/// Longest width or precision accepted, in digits
const MAX_NUMBER_DIGITS: usize = 2;

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<Option<usize>> {
    let mut value: Option<usize> = None;
    let mut digits = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        digits += 1;
        if digits > MAX_NUMBER_DIGITS {
            return Err(LoggerError::Format(
                "invalid conversion (width or precision too long)".into(),
            ));
        }
        value = Some(value.unwrap_or(0) * 10 + d as usize);
        chars.next();
    }
    Ok(value)
}

fn convert(conversion: char, spec: &Spec, arg: &FormatArg, position: usize) -> Result<String> {
    let expected = |what: &str| {
        LoggerError::Format(format!(
            "bad argument #{} ({} expected, got {})",
            position,
            what,
            arg.kind()
        ))
    };

    match conversion {
        's' => {
            let text = arg.to_string();
            let text = match spec.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            };
            Ok(pad(&text, spec))
        }
        'q' => Ok(pad(&quote(&arg.to_string()), spec)),
        'd' | 'i' | 'u' => {
            let n = arg.to_integer().ok_or_else(|| expected("number"))?;
            let mut digits = n.unsigned_abs().to_string();
            if let Some(p) = spec.precision {
                digits = format!("{:0>width$}", digits, width = p);
            }
            Ok(pad_number(sign(n < 0, spec), &digits, spec))
        }
        'c' => {
            let n = arg.to_integer().ok_or_else(|| expected("number"))?;
            let c = u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| expected("character code"))?;
            Ok(pad(&c.to_string(), spec))
        }
        'x' | 'X' | 'o' => {
            let n = arg.to_integer().ok_or_else(|| expected("number"))? as u64;
            let (digits, prefix) = match conversion {
                'x' => (format!("{:x}", n), "0x"),
                'X' => (format!("{:X}", n), "0X"),
                _ => (format!("{:o}", n), "0"),
            };
            let prefix = if spec.alt && n != 0 { prefix } else { "" };
            Ok(pad_number(prefix, &digits, spec))
        }
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
            let v = arg.to_float().ok_or_else(|| expected("number"))?;
            let body = format_float(v.abs(), conversion, spec);
            let body = if conversion.is_ascii_uppercase() {
                body.to_uppercase()
            } else {
                body
            };
            if v.is_finite() {
                Ok(pad_number(sign(v.is_sign_negative() && v != 0.0, spec), &body, spec))
            } else {
                Ok(pad(&format!("{}{}", sign(v.is_sign_negative(), spec), body), spec))
            }
        }
        other => Err(LoggerError::Format(format!(
            "invalid conversion '%{}' to format",
            other
        ))),
    }
}

/// Double-quote `text`, escaping quotes, backslashes and control bytes
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => {
                let next_is_digit = chars.peek().map_or(false, |n| n.is_ascii_digit());
                if next_is_digit {
                    out.push_str(&format!("\\{:03}", c as u32));
                } else {
                    out.push_str(&format!("\\{}", c as u32));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn sign(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn pad(text: &str, spec: &Spec) -> String {
    let len = text.chars().count();
    if len >= spec.width {
        return text.to_string();
    }
    let fill = " ".repeat(spec.width - len);
    if spec.left {
        format!("{}{}", text, fill)
    } else {
        format!("{}{}", fill, text)
    }
}

fn pad_number(prefix: &str, digits: &str, spec: &Spec) -> String {
    let len = prefix.len() + digits.len();
    if spec.zero && !spec.left && spec.width > len {
        format!("{}{}{}", prefix, "0".repeat(spec.width - len), digits)
    } else {
        pad(&format!("{}{}", prefix, digits), spec)
    }
}

fn format_float(v: f64, conversion: char, spec: &Spec) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return "inf".to_string();
    }
    let precision = spec.precision.unwrap_or(6);
    match conversion.to_ascii_lowercase() {
        'f' => format!("{:.*}", precision, v),
        'e' => exponent_form(v, precision),
        _ => {
            let p = precision.max(1);
            let exp = decimal_exponent(v, p - 1);
            let body = if exp < -4 || exp >= p as i32 {
                exponent_form(v, p - 1)
            } else {
                format!("{:.*}", (p as i32 - 1 - exp).max(0) as usize, v)
            };
            if spec.alt {
                body
            } else {
                strip_trailing_zeros(&body)
            }
        }
    }
}

fn decimal_exponent(v: f64, precision: usize) -> i32 {
    let rendered = format!("{:.*e}", precision, v);
    rendered
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn exponent_form(v: f64, precision: usize) -> String {
    let rendered = format!("{:.*e}", precision, v);
    match rendered.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        None => rendered,
    }
}

fn strip_trailing_zeros(body: &str) -> String {
    let (mantissa, exp) = match body.find('e') {
        Some(i) => body.split_at(i),
        None => (body, ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{}{}", mantissa, exp)
}
