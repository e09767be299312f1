use crate::core::actions::sample_grid::ports::point_algorithm::PointAlgorithm;
use crate::core::data::grid::Grid;
use crate::core::data::sample_order::SampleOrder;
use crate::core::data::samples::Samples;
use log::debug;

/// Evaluates `algorithm` once per grid cell, storing results in `order`.
///
/// An empty grid produces empty samples.
pub fn sample_grid<Alg: PointAlgorithm>(
    grid: &Grid,
    algorithm: &Alg,
    order: SampleOrder,
) -> Samples<Alg::Output> {
    let (width, height) = (grid.width(), grid.height());

    debug!(
        "sampling {}x{} grid ({}, dx={}, dy={})",
        width,
        height,
        order.display_name(),
        grid.dx(),
        grid.dy()
    );

    let mut values = Vec::with_capacity(grid.len());
    values.extend(
        order
            .cells(width, height)
            .map(|(column, row)| algorithm.compute(grid.point_unchecked(column, row))),
    );

    Samples::from_cells(width, height, order, values)
}
