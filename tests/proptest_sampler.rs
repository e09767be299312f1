use mandelbrot_sampler::{
    Domain, EscapeTime, Grid, MandelbrotAlgorithm, Point, SampleOrder, VerticalStep, escape_time,
    legacy_escape_time, sample_grid,
};
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = SampleOrder> {
    prop_oneof![Just(SampleOrder::ColumnMajor), Just(SampleOrder::RowMajor)]
}

fn step_strategy() -> impl Strategy<Value = VerticalStep> {
    prop_oneof![Just(VerticalStep::Height), Just(VerticalStep::Width)]
}

// Property 1: points starting outside the radius-2 disc escape on the first check
proptest! {
    #[test]
    fn prop_outside_disc_escapes_immediately(
        radius in 2.0001f64..1e6,
        angle in 0.0f64..std::f64::consts::TAU,
        max_iterations in 1u32..5000
    ) {
        let c = Point::new(radius * angle.cos(), radius * angle.sin());
        prop_assume!(c.magnitude_squared() > 4.0);

        let escape = escape_time(c, max_iterations);

        prop_assert_eq!(escape, EscapeTime::Escaped(1));
        prop_assert_eq!(escape.count(), 1);
    }
}

// Property 2: flattened escape time stays within the iteration budget
proptest! {
    #[test]
    fn prop_count_within_budget(
        x in -3.0f64..3.0,
        y in -3.0f64..3.0,
        max_iterations in 0u32..2000
    ) {
        let escape = escape_time(Point::new(x, y), max_iterations);

        prop_assert!(escape.count() <= max_iterations);
        if let EscapeTime::Escaped(n) = escape {
            prop_assert!(n >= 1);
        }
    }
}

// Property 3: the origin is in the set for every budget
proptest! {
    #[test]
    fn prop_origin_is_bounded(max_iterations in 0u32..100_000) {
        let escape = escape_time(Point::new(0.0, 0.0), max_iterations);

        prop_assert_eq!(escape, EscapeTime::Bounded);
        prop_assert_eq!(escape.count(), 0);
    }
}

// Property 4: legacy integer is the legacy projection of the tagged result
proptest! {
    #[test]
    fn prop_legacy_matches_tagged(
        x in -2.5f64..2.5,
        y in -2.5f64..2.5,
        max_iterations in 0u32..500
    ) {
        let c = Point::new(x, y);

        prop_assert_eq!(
            legacy_escape_time(c, max_iterations),
            escape_time(c, max_iterations).legacy_count()
        );
    }
}

// Property 5: a single-cell grid samples the domain origin
proptest! {
    #[test]
    fn prop_single_cell_is_origin(
        x_min in -3.0f64..3.0,
        x_max in -3.0f64..3.0,
        y_min in -3.0f64..3.0,
        y_max in -3.0f64..3.0,
        max_iterations in 0u32..300,
        order in order_strategy(),
        step in step_strategy()
    ) {
        let domain = Domain::new(x_min, x_max, y_min, y_max).unwrap();
        let grid = Grid::new(domain, 1, 1).with_vertical_step(step);

        let samples = sample_grid(&grid, &MandelbrotAlgorithm::new(max_iterations), order);

        prop_assert_eq!(samples.values(), &[escape_time(Point::new(x_min, y_min), max_iterations)]);
    }
}

// Property 6: output length is width * height, including empty grids
proptest! {
    #[test]
    fn prop_length_is_width_times_height(
        width in 0u32..40,
        height in 0u32..40,
        order in order_strategy()
    ) {
        let domain = Domain::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let grid = Grid::new(domain, width, height);

        let samples = sample_grid(&grid, &MandelbrotAlgorithm::new(16), order);

        prop_assert_eq!(samples.len(), (width * height) as usize);
    }
}

// Property 7: sampling holds no hidden state
proptest! {
    #[test]
    fn prop_sampling_is_deterministic(
        width in 1u32..24,
        height in 1u32..24,
        max_iterations in 1u32..200,
        order in order_strategy(),
        step in step_strategy()
    ) {
        let domain = Domain::new(-2.0, 0.5, -1.25, 1.25).unwrap();
        let grid = Grid::new(domain, width, height).with_vertical_step(step);
        let algorithm = MandelbrotAlgorithm::new(max_iterations);

        let first = sample_grid(&grid, &algorithm, order);
        let second = sample_grid(&grid, &algorithm, order);

        prop_assert_eq!(first, second);
    }
}

// Property 8: storage order never changes the value of a cell
proptest! {
    #[test]
    fn prop_orders_agree(
        width in 1u32..20,
        height in 1u32..20,
        max_iterations in 1u32..100
    ) {
        let domain = Domain::new(-2.0, 0.5, -1.25, 1.25).unwrap();
        let grid = Grid::new(domain, width, height);
        let algorithm = MandelbrotAlgorithm::new(max_iterations);

        let by_column = sample_grid(&grid, &algorithm, SampleOrder::ColumnMajor);
        let by_row = sample_grid(&grid, &algorithm, SampleOrder::RowMajor);

        for column in 0..width {
            for row in 0..height {
                prop_assert_eq!(by_column.get(column, row), by_row.get(column, row));
            }
        }
    }
}
