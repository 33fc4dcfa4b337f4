use finite_difference::{evaluate, evaluate_samples, select_direction, DerivativeOrder, Direction};
use proptest::prelude::*;

const DIRECTIONS: [Direction; 3] = [Direction::Forward, Direction::Centered, Direction::Backward];

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..3).prop_map(|i| DIRECTIONS[i])
}

proptest! {
    #[test]
    fn prop_first_order_exact_for_quadratics(
        a in -5.0f64..5.0,
        b in -5.0f64..5.0,
        c in -5.0f64..5.0,
        x in -3.0f64..3.0,
        dir in direction(),
    ) {
        let f = |t: f64| a * t * t + b * t + c;
        let d = evaluate(dir, 1, f, x, 0.5).unwrap();
        let expected = 2.0 * a * x + b;
        prop_assert!((d - expected).abs() < 1e-9, "{dir}: got {d}, expected {expected}");
    }

    #[test]
    fn prop_second_order_exact_for_cubics(
        a in -2.0f64..2.0,
        b in -2.0f64..2.0,
        x in -2.0f64..2.0,
        dir in direction(),
    ) {
        let f = |t: f64| a * t.powi(3) + b * t * t;
        let d = evaluate(dir, 2, f, x, 0.25).unwrap();
        let expected = 6.0 * a * x + 2.0 * b;
        prop_assert!((d - expected).abs() < 1e-8, "{dir}: got {d}, expected {expected}");
    }

    #[test]
    fn prop_repeated_calls_bit_identical(
        samples in prop::collection::vec(-100.0f64..100.0, 12..40),
        order in 1usize..=4,
        dir in direction(),
    ) {
        let index = samples.len() / 2;
        let first = evaluate_samples(dir, order, &samples, index);
        let second = evaluate_samples(dir, order, &samples, index);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn prop_selected_direction_fits(
        len in 0usize..30,
        index in 0usize..30,
        order in 1usize..=4,
    ) {
        let order = DerivativeOrder::try_from(order).unwrap();
        if let Some(dir) = select_direction(len, index, order) {
            let samples: Vec<f64> = (0..len).map(|i| i as f64).collect();
            prop_assert!(evaluate_samples(dir, order.as_usize(), &samples, index).is_ok());
        }
    }
}
