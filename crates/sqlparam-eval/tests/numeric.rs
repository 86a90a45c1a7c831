//! Property tests for numeric literals

use proptest::prelude::*;
use sqlparam_eval::{evaluate, format_typed};
use sqlparam_parser::parse_expression;
use sqlparam_types::{Type, Value};

proptest! {
    #[test]
    fn decimal_integers_round_trip(n in any::<i64>()) {
        let expr = parse_expression(&n.to_string()).unwrap();
        let typed = evaluate(&expr).unwrap();
        prop_assert_eq!(&typed.ty, &Type::Int64);
        prop_assert_eq!(&typed.value, &Value::String(n.to_string()));
        prop_assert_eq!(format_typed(&typed).unwrap(), n.to_string());
    }

    #[test]
    fn hex_integers_match_decimal(n in 0i64..=i64::MAX) {
        let expr = parse_expression(&format!("0x{:x}", n)).unwrap();
        let typed = evaluate(&expr).unwrap();
        prop_assert_eq!(typed.value, Value::String(n.to_string()));
    }

    #[test]
    fn finite_floats_display_parses_back(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let text = format!("{:e}", x);
        let expr = parse_expression(&text).unwrap();
        let typed = evaluate(&expr).unwrap();
        prop_assert_eq!(&typed.value, &Value::Number(x));
        let shown = format_typed(&typed).unwrap();
        prop_assert_eq!(shown.parse::<f64>().unwrap(), x);
    }

    #[test]
    fn numeric_full_range_pads_to_nine_digits(
        whole in "-?[1-9][0-9]{0,28}",
        fraction in "[0-9]{0,9}",
    ) {
        let text = if fraction.is_empty() { whole.clone() } else { format!("{}.{}", whole, fraction) };
        let expr = parse_expression(&format!("NUMERIC '{}'", text)).unwrap();
        let typed = evaluate(&expr).unwrap();
        prop_assert_eq!(&typed.ty, &Type::Numeric);
        let expected = format!("{}.{:0<9}", whole, fraction);
        prop_assert_eq!(format_typed(&typed).unwrap(), expected);
    }

    #[test]
    fn numeric_extra_digits_round_half_away_from_zero(
        whole in "[1-9][0-9]{0,20}",
        fraction in "[0-9]{9}",
        extra in 0u8..=9,
        negative in any::<bool>(),
    ) {
        let sign = if negative { "-" } else { "" };
        let expr = parse_expression(&format!("NUMERIC '{}{}.{}{}'", sign, whole, fraction, extra)).unwrap();
        let shown = format_typed(&evaluate(&expr).unwrap()).unwrap();
        let scaled: u128 = format!("{}{}", whole, fraction).parse().unwrap();
        let rounded = if extra >= 5 { scaled + 1 } else { scaled };
        let digits = format!("{:010}", rounded);
        let (int_part, frac_part) = digits.split_at(digits.len() - 9);
        prop_assert_eq!(shown, format!("{}{}.{}", sign, int_part, frac_part));
    }
}
