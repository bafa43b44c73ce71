use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fixed_deposit_rs::{
    AccrualEngine, DepositStatus, FixedDeposit, Money, Rate, SafeTimeProvider, TimeSource,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Principal from the booking minimum up to 10M.
fn arb_amount() -> impl Strategy<Value = Money> {
    (1_000i64..10_000_000i64).prop_map(Money::from_major)
}

/// Annual percentage from 0.0% to 15.0% in tenth-of-a-percent steps.
fn arb_rate() -> impl Strategy<Value = Rate> {
    (0i64..=150i64).prop_map(|tenths| Rate::from_percentage(Decimal::new(tenths, 1)))
}

/// Any calendar date within a ~55-year window.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000i64)
        .prop_map(|days| NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(days))
}

proptest! {
    /// Accrued interest is never negative, whatever the date pair: a
    /// cutoff before the start clamps to zero instead.
    #[test]
    fn accrued_interest_is_never_negative(
        amount in arb_amount(),
        rate in arb_rate(),
        start in arb_date(),
        cutoff in arb_date(),
    ) {
        let engine = AccrualEngine::new();
        let accrued = engine.accrued_between(amount, rate, start, cutoff);
        prop_assert!(!accrued.is_negative());
    }

    /// Simple interest only grows as the cutoff moves later.
    #[test]
    fn accrual_is_monotone_in_the_cutoff(
        amount in arb_amount(),
        rate in arb_rate(),
        start in arb_date(),
        near in arb_date(),
        extra_days in 0i64..5_000i64,
    ) {
        let engine = AccrualEngine::new();
        let far = near + Duration::days(extra_days);
        let at_near = engine.accrued_between(amount, rate, start, near);
        let at_far = engine.accrued_between(amount, rate, start, far);
        prop_assert!(at_near <= at_far);
    }

    /// A broken deposit reports the same accrued interest no matter when
    /// it is read.
    #[test]
    fn broken_accrual_is_stable_as_the_clock_advances(
        amount in arb_amount(),
        rate in arb_rate(),
        start in arb_date(),
        days_to_break in 0i64..2_000i64,
        first_read in 0i64..2_000i64,
        second_read in 0i64..2_000i64,
    ) {
        let broken_date = start + Duration::days(days_to_break);
        let deposit = FixedDeposit {
            id: None,
            user_id: uuid::Uuid::new_v4(),
            amount,
            scheme: "Regular Saver".to_string(),
            interest_rate: rate,
            tenure_months: 120,
            start_date: start,
            maturity_date: FixedDeposit::maturity_for(start, 120),
            status: DepositStatus::Broken,
            broken_date: Some(broken_date),
            accrued_interest: Money::ZERO,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let engine = AccrualEngine::new();
        let read_at = |days: i64| {
            let clock = broken_date + Duration::days(days);
            let time = SafeTimeProvider::new(TimeSource::Test(
                clock.and_hms_opt(0, 0, 0).unwrap().and_utc(),
            ));
            engine.accrued_interest(&deposit, &time)
        };

        prop_assert_eq!(read_at(first_read), read_at(second_read));
    }
}
