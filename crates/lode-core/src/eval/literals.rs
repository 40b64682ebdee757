//! Decoding of string and numeric literal text.

use crate::errors::EvalError;

/// Parse a JavaScript numeric literal. Handles decimal, fraction, exponent,
/// `_` separators, and the `0x`/`0o`/`0b` radix forms. BigInt (`1n`) is not
/// representable as an f64 and is rejected as unsupported syntax.
pub(super) fn parse_number(text: &str, line: usize) -> Result<f64, EvalError> {
    let cleaned = text.replace('_', "");
    let t = cleaned.as_str();

    if t.ends_with('n') || t.ends_with('N') {
        return Err(EvalError::Unsupported {
            kind: "bigint".to_string(),
            line,
        });
    }

    let radix = match t.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&t[2..], radix)
            .map(|v| v as f64)
            .map_err(|e| EvalError::Malformed {
                message: format!("bad numeric literal `{text}`: {e}"),
                line,
            });
    }

    t.parse::<f64>().map_err(|e| EvalError::Malformed {
        message: format!("bad numeric literal `{text}`: {e}"),
        line,
    })
}

/// Decode a quoted string literal (single, double, or backtick quotes),
/// applying the JavaScript escape set including surrogate pairs.
pub(super) fn unescape_string(raw: &str, line: usize) -> Result<String, EvalError> {
    if raw.len() < 2 {
        return Err(malformed("string literal too short", line));
    }
    let inner = &raw[1..raw.len() - 1];
    let chars: Vec<char> = inner.chars().collect();
    let mut out = String::with_capacity(inner.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&esc) = chars.get(i) else {
            return Err(malformed("dangling backslash", line));
        };
        i += 1;
        match esc {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'v' => out.push('\u{000B}'),
            '0' => out.push('\0'),
            'x' => {
                let code = read_hex(&chars, &mut i, 2, line)?;
                out.push(char::from_u32(code).ok_or_else(|| malformed("bad \\x escape", line))?);
            }
            'u' => {
                let code = read_unicode(&chars, &mut i, line)?;
                out.push(code);
            }
            // Escaped line terminators are continuations and produce nothing.
            '\n' => {}
            '\r' => {
                if chars.get(i) == Some(&'\n') {
                    i += 1;
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Decode `\uHHHH` or `\u{…}` (the leading `\u` is already consumed),
/// combining UTF-16 surrogate pairs written as two `\uHHHH` escapes.
fn read_unicode(chars: &[char], i: &mut usize, line: usize) -> Result<char, EvalError> {
    if chars.get(*i) == Some(&'{') {
        *i += 1;
        let start = *i;
        while *i < chars.len() && chars[*i] != '}' {
            *i += 1;
        }
        if *i >= chars.len() {
            return Err(malformed("unterminated \\u{…} escape", line));
        }
        let digits: String = chars[start..*i].iter().collect();
        *i += 1; // consume '}'
        let code = u32::from_str_radix(&digits, 16)
            .map_err(|_| malformed("bad \\u{…} escape", line))?;
        return char::from_u32(code).ok_or_else(|| malformed("bad \\u{…} escape", line));
    }

    let first = read_hex(chars, i, 4, line)?;
    if (0xD800..=0xDBFF).contains(&first) {
        // High surrogate: require a trailing \uHHHH low surrogate.
        if chars.get(*i) == Some(&'\\') && chars.get(*i + 1) == Some(&'u') {
            *i += 2;
            let second = read_hex(chars, i, 4, line)?;
            if (0xDC00..=0xDFFF).contains(&second) {
                let combined = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                return char::from_u32(combined)
                    .ok_or_else(|| malformed("bad surrogate pair", line));
            }
        }
        return Err(malformed("lone surrogate in \\u escape", line));
    }
    if (0xDC00..=0xDFFF).contains(&first) {
        return Err(malformed("lone surrogate in \\u escape", line));
    }
    char::from_u32(first).ok_or_else(|| malformed("bad \\u escape", line))
}

fn read_hex(chars: &[char], i: &mut usize, len: usize, line: usize) -> Result<u32, EvalError> {
    if *i + len > chars.len() {
        return Err(malformed("truncated hex escape", line));
    }
    let digits: String = chars[*i..*i + len].iter().collect();
    *i += len;
    u32::from_str_radix(&digits, 16).map_err(|_| malformed("bad hex escape", line))
}

fn malformed(message: &str, line: usize) -> EvalError {
    EvalError::Malformed {
        message: message.to_string(),
        line,
    }
}

/// JavaScript `ToString` for the numeric object keys the grammar accepts.
pub(super) fn format_number_key(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() <= 9_007_199_254_740_991.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
