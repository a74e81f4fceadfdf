#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::core::counter::{Counter, Fixed, Initializer, Randomized, Zero};
    use crate::core::fault::FaultGuard;
    use crate::tests::lock_fault_flag;

    #[test]
    fn test_new_starts_at_zero() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(false);

        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
    }

    #[traced_test]
    #[test]
    fn test_new_logs_one_line_with_flag() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(false);

        let _counter = Counter::new();
        assert!(logs_contain("Creating a new counter with initial value: 0 (faulty: false)"));
        assert!(!logs_contain("Creating a new counter (faulty"));
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::with_initializer(&mut Zero);
        counter.increment();
        assert_eq!(counter.count(), 1);

        counter.increment();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_n_increments_count_n() {
        for n in [0_i64, 1, 7, 250] {
            let mut counter = Counter::with_initializer(&mut Zero);
            for _ in 0..n {
                counter.increment();
            }
            assert_eq!(counter.count(), n);
        }
    }

    #[test]
    fn test_three_increments() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(false);

        let mut counter = Counter::new();
        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_reset_after_increments() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(false);

        let mut counter = Counter::new();
        counter.increment();
        counter.increment();
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_reset_overrides_faulty_start() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(true);

        let mut counter = Counter::new();
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_faulty_construction_succeeds() {
        let _lock = lock_fault_flag();
        let _flag = FaultGuard::engage(true);

        // Any value is acceptable; construction just has to work.
        let counter = Counter::new();
        let _value: i64 = counter.count();
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut counter = Counter::with_initializer(&mut Fixed(-12));
        counter.reset();
        let once = counter.clone();
        counter.reset();
        assert_eq!(counter, once);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_fixed_initializer() {
        let mut counter = Counter::with_initializer(&mut Fixed(42));
        assert_eq!(counter.count(), 42);

        counter.increment();
        assert_eq!(counter.count(), 43);

        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_increment_wraps_at_max() {
        let mut counter = Counter::with_initializer(&mut Fixed(i64::MAX));
        counter.increment();
        assert_eq!(counter.count(), i64::MIN);
    }

    #[test]
    fn test_seeded_randomized_is_reproducible() {
        let first = Randomized::seeded(7).initial_value();
        let second = Randomized::seeded(7).initial_value();
        assert_eq!(first, second);

        let counter = Counter::with_initializer(&mut Randomized::seeded(7));
        assert_eq!(counter.count(), first);
    }

    #[test]
    fn test_flag_is_read_only_at_construction() {
        let _lock = lock_fault_flag();
        let flag = FaultGuard::engage(false);
        let mut counter = Counter::new();

        drop(flag);
        let _flag = FaultGuard::engage(true);
        counter.increment();
        assert_eq!(counter.count(), 1);
    }
}
