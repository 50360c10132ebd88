//! Property-based tests for amount calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use daftar_shared::types::Currency;

use super::calculator::AmountCalculator;

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate whole amounts, where conversion never rounds.
fn whole_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(Decimal::from)
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn non_taxable_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![Currency::SarNoVat, Currency::Jod, Currency::Usd, Currency::Eur])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Gross is always the exact sum of net and VAT.
    #[test]
    fn prop_gross_is_net_plus_vat(
        amount in positive_amount(),
        currency in any_currency(),
        disable_vat in any::<bool>(),
    ) {
        let result = AmountCalculator::default().calculate(amount, currency, disable_vat).unwrap();
        prop_assert_eq!(result.gross, result.net + result.vat);
        prop_assert!(result.net.scale() <= 2);
        prop_assert!(result.vat.scale() <= 2);
    }

    /// Non-taxable currencies never carry VAT.
    #[test]
    fn prop_non_taxable_has_no_vat(
        amount in positive_amount(),
        currency in non_taxable_currency(),
        disable_vat in any::<bool>(),
    ) {
        let result = AmountCalculator::default().calculate(amount, currency, disable_vat).unwrap();
        prop_assert_eq!(result.vat, Decimal::ZERO);
        prop_assert_eq!(result.gross, result.net);
    }

    /// Taxable currency with VAT disabled behaves like the untaxed variant.
    #[test]
    fn prop_disable_vat_matches_sar_no_vat(amount in positive_amount()) {
        let calc = AmountCalculator::default();
        let disabled = calc.calculate(amount, Currency::Sar, true).unwrap();
        let untaxed = calc.calculate(amount, Currency::SarNoVat, false).unwrap();
        prop_assert_eq!(disabled.vat, Decimal::ZERO);
        prop_assert_eq!(disabled.gross, untaxed.gross);
    }

    /// SAR with VAT enabled: VAT is 15% of net within half a cent.
    #[test]
    fn prop_sar_vat_is_fifteen_percent(amount in positive_amount()) {
        let result = AmountCalculator::default().calculate(amount, Currency::Sar, false).unwrap();
        prop_assert_eq!(result.net, amount);
        prop_assert!((result.vat - result.net * dec!(0.15)).abs() <= dec!(0.005));
        prop_assert!((result.gross - result.net * dec!(1.15)).abs() <= dec!(0.005));
    }

    /// Conversion is linear in the amount when no rounding occurs.
    #[test]
    fn prop_conversion_is_linear(
        amount in whole_amount(),
        k in 1i64..100,
        currency in non_taxable_currency(),
    ) {
        let calc = AmountCalculator::default();
        let k = Decimal::from(k);
        let single = calc.calculate(amount, currency, false).unwrap();
        let scaled = calc.calculate(amount * k, currency, false).unwrap();
        prop_assert_eq!(scaled.net, single.net * k);
        prop_assert_eq!(scaled.gross, single.gross * k);
    }

    /// Net is monotonic in the entered amount.
    #[test]
    fn prop_net_is_monotonic(
        a in positive_amount(),
        b in positive_amount(),
        currency in any_currency(),
    ) {
        let calc = AmountCalculator::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calc.calculate(lo, currency, false).unwrap().net <= calc.calculate(hi, currency, false).unwrap().net);
    }
}
