use ohlcv_chart::core::{DEFAULT_MAX_LABEL_LEN, format_delta_label, format_label};
use proptest::prelude::*;

#[test]
fn price_labels_fill_the_default_slot() {
    for (value, expected) in [
        (7.0_f32, "7.0000"),
        (15.25, "15.250"),
        (-3.5, "-3.500"),
        (99_999.9, "99999 "),
        (0.000_5, "0.0005"),
    ] {
        let label = format_label(value, DEFAULT_MAX_LABEL_LEN);
        assert_eq!(label.len(), DEFAULT_MAX_LABEL_LEN, "label `{label}`");
        assert_eq!(label, expected);
    }
}

#[test]
fn wide_slots_are_right_padded() {
    let label = format_label(2.0, 10);
    assert_eq!(label, "2.000000  ");
}

#[test]
fn delta_label_for_two_by_two_selection() {
    assert_eq!(format_delta_label(-2.0, 2.0, DEFAULT_MAX_LABEL_LEN), "2;2");
}

proptest! {
    #[test]
    fn label_is_always_exactly_max_len(
        value in any::<f32>().prop_filter("finite", |v| v.is_finite()),
        max_len in 2usize..16
    ) {
        let label = format_label(value, max_len);
        prop_assert_eq!(label.chars().count(), max_len);
    }

    #[test]
    fn short_representations_are_padded_to_max_len(value in -9.0f32..9.0, max_len in 9usize..20) {
        let label = format_label(value, max_len);
        prop_assert_eq!(label.len(), max_len);
        prop_assert!(label.trim_end().len() <= max_len);
    }

    #[test]
    fn truncation_never_rounds_up(value in 0.0f32..1_000.0) {
        let label = format_label(value, DEFAULT_MAX_LABEL_LEN);
        let parsed: f64 = label.trim_end().trim_end_matches('.').parse().expect("numeric label");
        // Only the six-digit fixed-point step may round, by at most half a unit.
        prop_assert!(parsed <= f64::from(value) + 1e-6);
    }
}
