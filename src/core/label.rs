//! Fixed-width axis label formatting.
//!
//! Labels occupy a constant-width slot so tick and crosshair text does not
//! shift between frames while the values change.

/// Label width used by the axis and crosshair labels unless configured.
pub const DEFAULT_MAX_LABEL_LEN: usize = 6;

const MAGNITUDE_SUFFIXES: [(f32, char); 4] = [(1e3, 'k'), (1e6, 'M'), (1e9, 'G'), (1e12, 'T')];

/// Formats `value` into exactly `max_len` characters.
///
/// The value is written in fixed point with six fractional digits, then
/// trailing fractional digits are dropped (truncated, not rounded) until the
/// text fits or one fractional digit is left. Integer parts that still
/// overflow lose the fraction, then fall back to a `k`/`M`/`G`/`T` suffix.
/// Short results are right-padded with spaces.
#[must_use]
pub fn format_label(value: f32, max_len: usize) -> String {
    let mut label = fixed_point(value, max_len);
    if label.len() > max_len {
        label = with_magnitude_suffix(value, max_len).unwrap_or(label);
    }
    if label.len() > max_len {
        label.truncate(max_len);
    }
    format!("{label:<max_len$}")
}

/// Formats a selection delta as `|dx|;|dy|`.
///
/// Each side goes through [`format_label`] and is then compacted: padding,
/// trailing fractional zeros and a dangling decimal point are removed.
#[must_use]
pub fn format_delta_label(dx: f32, dy: f32, max_len: usize) -> String {
    format!(
        "{};{}",
        compact(&format_label(dx.abs(), max_len)),
        compact(&format_label(dy.abs(), max_len))
    )
}

fn fixed_point(value: f32, max_len: usize) -> String {
    // Normalizes negative zero so it never renders as "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    let mut label = format!("{value:.6}");
    if let Some(dot) = label.find('.') {
        while label.len() > max_len && dot + 2 < label.len() {
            label.pop();
        }
        if label.len() > max_len {
            label.truncate(dot);
        }
    }
    label
}

fn with_magnitude_suffix(value: f32, max_len: usize) -> Option<String> {
    let body_len = max_len.checked_sub(1).filter(|len| *len > 0)?;
    MAGNITUDE_SUFFIXES.iter().find_map(|(scale, suffix)| {
        let body = fixed_point(value / scale, body_len);
        (body.len() <= body_len).then(|| format!("{body}{suffix}"))
    })
}

fn compact(label: &str) -> String {
    let label = label.trim_end();
    let body = label.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &label[body.len()..];
    let body = if body.contains('.') {
        body.trim_end_matches('0').trim_end_matches('.')
    } else {
        body
    };
    format!("{body}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_LABEL_LEN, format_delta_label, format_label};

    #[test]
    fn truncates_fraction_without_rounding() {
        assert_eq!(format_label(12.3456789, DEFAULT_MAX_LABEL_LEN), "12.345");
        assert_eq!(format_label(0.999999, DEFAULT_MAX_LABEL_LEN), "0.9999");
    }

    #[test]
    fn keeps_one_fractional_digit_before_dropping_fraction() {
        assert_eq!(format_label(1234.5, DEFAULT_MAX_LABEL_LEN), "1234.5");
        assert_eq!(format_label(123456.0, DEFAULT_MAX_LABEL_LEN), "123456");
    }

    #[test]
    fn huge_values_use_magnitude_suffix() {
        assert_eq!(format_label(1_234_567.0, DEFAULT_MAX_LABEL_LEN), "1234k ");
        assert_eq!(format_label(-1_234_567.0, DEFAULT_MAX_LABEL_LEN), "-1234k");
    }

    #[test]
    fn short_labels_are_padded() {
        assert_eq!(format_label(1.5, 12), "1.500000    ");
        assert_eq!(format_label(-0.0, DEFAULT_MAX_LABEL_LEN), "0.0000");
    }

    #[test]
    fn delta_label_is_compact() {
        assert_eq!(format_delta_label(2.0, -2.0, DEFAULT_MAX_LABEL_LEN), "2;2");
        assert_eq!(format_delta_label(-2.5, 0.125, DEFAULT_MAX_LABEL_LEN), "2.5;0.125");
        assert_eq!(format_delta_label(1_500_000.0, 0.0, DEFAULT_MAX_LABEL_LEN), "1500k;0");
    }
}
