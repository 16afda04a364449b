/// Compact dollar formatting used on the calculator result cards.
///
/// Values of a million or more render as `$X.XM` with one decimal; smaller
/// values render as whole thousands, `$XXXK`. Both branches round to the
/// displayed precision, so 999,999 comes out as `$1000K`, not `$999K`.
pub fn format_currency(amount: i64) -> String {
    if amount >= 1_000_000 {
        let tenths_of_millions = (amount as f64 / 100_000.0).round() as i64;
        format!("${}.{}M", tenths_of_millions / 10, tenths_of_millions % 10)
    } else {
        let thousands = (amount as f64 / 1_000.0).round() as i64;
        format!("${thousands}K")
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn millions_render_with_one_decimal() {
        assert_eq!(format_currency(1_125_000), "$1.1M");
        assert_eq!(format_currency(1_000_000), "$1.0M");
        assert_eq!(format_currency(2_340_000), "$2.3M");
        assert_eq!(format_currency(2_350_000), "$2.4M");
    }

    #[test]
    fn thousands_render_rounded_to_whole_thousands() {
        assert_eq!(format_currency(42_600), "$43K");
        assert_eq!(format_currency(42_400), "$42K");
        assert_eq!(format_currency(13_500), "$14K");
        assert_eq!(format_currency(0), "$0K");
    }

    #[test]
    fn just_below_a_million_rounds_into_the_thousands_branch() {
        assert_eq!(format_currency(999_999), "$1000K");
    }
}
