//! Tests for `DeliveryBudget`.

use super::DeliveryBudget;
use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

mod defaults {
    use super::*;

    #[test]
    fn three_attempts_two_seconds_apart() {
        let budget = DeliveryBudget::default();

        assert_eq!(budget.attempts(), 3);
        assert_eq!(budget.pause_after(1), 2 * SECOND);
    }

    #[test]
    fn single_never_allows_a_second_attempt() {
        assert!(!DeliveryBudget::single().allows_after(1));
    }

    #[test]
    #[should_panic(expected = "attempts must be at least 1")]
    fn zero_attempts_panics() {
        let _ = DeliveryBudget::new().with_attempts(0);
    }
}

mod schedule {
    use super::*;

    #[test]
    fn pauses_grow_linearly() {
        let budget = DeliveryBudget::new().with_pause(3 * SECOND);

        assert_eq!(budget.pause_after(1), 3 * SECOND);
        assert_eq!(budget.pause_after(2), 6 * SECOND);
        assert_eq!(budget.pause_after(3), 9 * SECOND);
    }

    #[test]
    fn allows_until_attempts_are_used() {
        let budget = DeliveryBudget::new().with_attempts(3);

        assert!(budget.allows_after(1));
        assert!(budget.allows_after(2));
        assert!(!budget.allows_after(3));
    }

    #[test]
    fn worst_case_adds_timeouts_and_pauses() {
        let budget = DeliveryBudget::new();

        // 3 x 10s requests + 2s + 4s pauses
        assert_eq!(budget.worst_case(10 * SECOND), 36 * SECOND);
    }

    #[test]
    fn worst_case_of_single_attempt_is_the_timeout() {
        assert_eq!(DeliveryBudget::single().worst_case(10 * SECOND), 10 * SECOND);
    }
}

mod fitting {
    use super::*;

    #[test]
    fn drops_attempts_that_overrun_the_window() {
        let budget = DeliveryBudget::new().fit_within(30 * SECOND, 10 * SECOND);

        assert_eq!(budget.attempts(), 2);
        assert!(budget.worst_case(10 * SECOND) <= 30 * SECOND);
    }

    #[test]
    fn keeps_a_budget_that_already_fits() {
        let budget = DeliveryBudget::new().fit_within(60 * SECOND, 10 * SECOND);

        assert_eq!(budget.attempts(), 3);
    }

    #[test]
    fn never_drops_below_one_attempt() {
        let budget = DeliveryBudget::new().fit_within(SECOND, 10 * SECOND);

        assert_eq!(budget.attempts(), 1);
    }
}
