//! Ratios with explicit zero-denominator branches.
//!
//! | income | expenses | profit margin            | income/expense ratio        |
//! |--------|----------|--------------------------|-----------------------------|
//! | > 0    | any      | `(i - e) / i * 100`      | `i / e` or `ZeroExpenses`   |
//! | 0      | > 0      | `Undefined(ZeroIncome)`  | `0`                         |
//! | 0      | 0        | `0`                      | `0`                         |
//!
//! `Undefined(ZeroIncome)` reads as an unbounded deficit and
//! `Undefined(ZeroExpenses)` as an unbounded ratio. A quotient too large for
//! a `Decimal` is `Undefined(Overflow)`.

use rust_decimal::Decimal;
use serde::Serialize;

/// Why a ratio has no finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// Expenses with no income to divide by.
    ZeroIncome,
    /// Income with no expenses to divide by.
    ZeroExpenses,
    /// The quotient does not fit in a `Decimal`.
    Overflow,
}

/// A ratio that is either a finite value or a tagged undefined state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ratio {
    /// Finite value.
    Defined {
        /// The value.
        value: Decimal,
    },
    /// No finite value exists.
    Undefined {
        /// Why no value exists.
        reason: UndefinedReason,
    },
}

impl Ratio {
    /// Finite ratio.
    #[must_use]
    pub const fn defined(value: Decimal) -> Self {
        Self::Defined { value }
    }

    /// Undefined ratio.
    #[must_use]
    pub const fn undefined(reason: UndefinedReason) -> Self {
        Self::Undefined { reason }
    }

    /// The finite value, if any.
    #[must_use]
    pub const fn value(self) -> Option<Decimal> {
        match self {
            Self::Defined { value } => Some(value),
            Self::Undefined { .. } => None,
        }
    }

    /// Applies `f` to a finite value.
    #[must_use]
    pub fn map(self, f: impl FnOnce(Decimal) -> Decimal) -> Self {
        match self {
            Self::Defined { value } => Self::Defined { value: f(value) },
            undefined @ Self::Undefined { .. } => undefined,
        }
    }
}

/// `(income - expenses) / income * 100`.
#[must_use]
pub fn profit_margin_pct(income: Decimal, expenses: Decimal) -> Ratio {
    if income > Decimal::ZERO {
        income
            .checked_sub(expenses)
            .and_then(|net| net.checked_div(income))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Ratio::undefined(UndefinedReason::Overflow), Ratio::defined)
    } else if expenses > Decimal::ZERO {
        Ratio::undefined(UndefinedReason::ZeroIncome)
    } else {
        Ratio::defined(Decimal::ZERO)
    }
}

/// `income / expenses`.
#[must_use]
pub fn income_to_expense_ratio(income: Decimal, expenses: Decimal) -> Ratio {
    if expenses > Decimal::ZERO {
        income
            .checked_div(expenses)
            .map_or(Ratio::undefined(UndefinedReason::Overflow), Ratio::defined)
    } else if income > Decimal::ZERO {
        Ratio::undefined(UndefinedReason::ZeroExpenses)
    } else {
        Ratio::defined(Decimal::ZERO)
    }
}

/// `part / total * 100`, or 0 when the total is 0.
///
/// Saturates to `Decimal::MAX` or `Decimal::MIN` when the share does not fit.
#[must_use]
pub fn share_pct(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == total.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(800), Ratio::defined(dec!(20)))]
    #[case(dec!(1000), dec!(1200), Ratio::defined(dec!(-20)))]
    #[case(dec!(0), dec!(500), Ratio::undefined(UndefinedReason::ZeroIncome))]
    #[case(dec!(0), dec!(0), Ratio::defined(dec!(0)))]
    fn test_profit_margin(#[case] income: Decimal, #[case] expenses: Decimal, #[case] expected: Ratio) {
        assert_eq!(profit_margin_pct(income, expenses), expected);
    }

    #[rstest]
    #[case(dec!(1000), dec!(800), Ratio::defined(dec!(1.25)))]
    #[case(dec!(0), dec!(800), Ratio::defined(dec!(0)))]
    #[case(dec!(500), dec!(0), Ratio::undefined(UndefinedReason::ZeroExpenses))]
    #[case(dec!(0), dec!(0), Ratio::defined(dec!(0)))]
    fn test_income_to_expense(
        #[case] income: Decimal,
        #[case] expenses: Decimal,
        #[case] expected: Ratio,
    ) {
        assert_eq!(income_to_expense_ratio(income, expenses), expected);
    }

    #[test]
    fn test_share_of_zero_total() {
        assert_eq!(share_pct(dec!(10), dec!(0)), Decimal::ZERO);
        assert_eq!(share_pct(dec!(25), dec!(200)), dec!(12.5));
    }

    #[test]
    fn test_tiny_denominators_are_undefined_not_fatal() {
        let tiny = Decimal::new(1, 10);
        let huge = dec!(1000000000000000000);
        assert_eq!(
            profit_margin_pct(tiny, huge),
            Ratio::undefined(UndefinedReason::Overflow)
        );
        assert_eq!(
            income_to_expense_ratio(Decimal::MAX, tiny),
            Ratio::undefined(UndefinedReason::Overflow)
        );
        assert_eq!(share_pct(huge, tiny), Decimal::MAX);
        assert_eq!(share_pct(-huge, tiny), Decimal::MIN);
    }

    #[test]
    fn test_serialized_shape() {
        let defined = serde_json::to_value(Ratio::defined(dec!(12.5))).unwrap();
        assert_eq!(defined["kind"], "defined");
        assert_eq!(defined["value"], "12.5");

        let undefined = serde_json::to_value(Ratio::undefined(UndefinedReason::ZeroIncome)).unwrap();
        assert_eq!(undefined["kind"], "undefined");
        assert_eq!(undefined["reason"], "zero_income");

        let overflow = serde_json::to_value(Ratio::undefined(UndefinedReason::Overflow)).unwrap();
        assert_eq!(overflow["reason"], "overflow");
    }

    #[test]
    fn test_map_keeps_undefined() {
        let r = Ratio::undefined(UndefinedReason::ZeroExpenses).map(|v| v * dec!(2));
        assert_eq!(r.value(), None);
        assert_eq!(Ratio::defined(dec!(2)).map(|v| v * dec!(2)).value(), Some(dec!(4)));
    }
}
