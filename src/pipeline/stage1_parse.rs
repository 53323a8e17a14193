pub const TOKEN_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

/// Renders a model output vector in the legacy `%.2f; %.2f; ...` form.
pub fn format_serialized_output(probabilities: &[f32], separator: DecimalSeparator) -> String {
    probabilities
        .iter()
        .map(|&p| {
            let s = format_half_up_2(p);
            match separator {
                DecimalSeparator::Point => s,
                DecimalSeparator::Comma => s.replace('.', ","),
            }
        })
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}

/// Two decimals, rounding half up on the shortest decimal form of `p`, so
/// 0.125 renders as "0.13".
pub fn format_half_up_2(p: f32) -> String {
    if p.is_nan() {
        return "NaN".to_string();
    }
    if p.is_infinite() {
        return if p > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let shortest = format!("{}", p.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits = int_part.bytes().map(|b| b - b'0').collect::<Vec<_>>();
    let mut frac = frac_part.bytes().map(|b| b - b'0').collect::<Vec<_>>();
    let round_up = frac.get(2).is_some_and(|&d| d >= 5);
    frac.resize(2, 0);
    digits.extend_from_slice(&frac);

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if p.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    out.push('.');
    out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    out
}

/// Parses the legacy serialized form back into floats. Commas are read as
/// decimal points; tokens that still fail to parse are skipped, so the result
/// can be shorter than the input. Non-finite values (`inf`, `NaN`) are
/// skipped too.
pub fn parse_serialized_output(text: &str) -> Vec<f32> {
    let normalized = text.replace(',', ".");
    let mut out = Vec::new();
    for token in normalized.split(TOKEN_SEPARATOR) {
        match token.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => out.push(v),
            _ => {
                crate::debug!(token, "dropping unparseable model output token");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_parse.rs"]
mod tests;
