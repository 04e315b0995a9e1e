//! Decimal text to `f64` conversion with `strtod`-like leniency

/// Convert field text to a float
///
/// Surrounding C-locale whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`)
/// is ignored and an empty field is `0.0`. Hexadecimal text (`0x1A`,
/// `-0x1.8p3`) is accepted. Text that is not a complete float falls back to
/// its longest numeric prefix (`"12.5kg"` is `12.5`), and text with no
/// numeric prefix is `0.0`.
pub fn parse_decimal(text: &[u8]) -> f64 {
    let text = trim_space(text);
    if text.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = match text[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if let [b'0', b'x' | b'X', hex @ ..] = unsigned {
        if let Some(value) = parse_hex(hex) {
            return if negative { -value } else { value };
        }
    }

    if let Some(value) = std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
    {
        return value;
    }

    let end = numeric_prefix_len(text);
    std::str::from_utf8(&text[..end])
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

fn trim_space(text: &[u8]) -> &[u8] {
    let start = text.iter().position(|&b| !is_space(b)).unwrap_or(text.len());
    let end = text.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &text[start..end]
}

fn hex_digit(byte: Option<&u8>) -> Option<u32> {
    byte.and_then(|&b| (b as char).to_digit(16))
}

/// Parse `hexdigits [. hexdigits] [p [sign] digits]` after a `0x` prefix,
/// ignoring anything that follows
fn parse_hex(text: &[u8]) -> Option<f64> {
    let mut value = 0.0f64;
    let mut scale: i32 = 0;
    let mut digits = 0;
    let mut pos = 0;

    while let Some(d) = hex_digit(text.get(pos)) {
        value = value * 16.0 + f64::from(d);
        digits += 1;
        pos += 1;
    }
    if text.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = hex_digit(text.get(pos)) {
            value = value * 16.0 + f64::from(d);
            scale = scale.saturating_sub(4);
            digits += 1;
            pos += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(text.get(pos), Some(b'p' | b'P')) {
        let mut exp = pos + 1;
        let negative = match text.get(exp) {
            Some(b'-') => {
                exp += 1;
                true
            }
            Some(b'+') => {
                exp += 1;
                false
            }
            _ => false,
        };
        let len = count_digits(&text[exp..]);
        if len > 0 {
            let power = text[exp..exp + len].iter().fold(0i32, |acc, &b| {
                acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
            });
            scale = if negative {
                scale.saturating_sub(power)
            } else {
                scale.saturating_add(power)
            };
        }
    }

    Some(value * 2f64.powi(scale))
}

/// Length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix
fn numeric_prefix_len(text: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(text.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    pos += count_digits(&text[pos..]);
    let mut mantissa_digits = pos - int_start;

    if text.get(pos) == Some(&b'.') {
        let frac = count_digits(&text[pos + 1..]);
        if mantissa_digits > 0 || frac > 0 {
            pos += 1 + frac;
            mantissa_digits += frac;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows
    if matches!(text.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(text.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = count_digits(&text[exp..]);
        if digits > 0 {
            pos = exp + digits;
        }
    }

    pos
}

fn count_digits(text: &[u8]) -> usize {
    text.iter().take_while(|b| b.is_ascii_digit()).count()
}
