use crate::core::data::point::Point;

pub trait PointAlgorithm {
    type Output;

    fn compute(&self, point: Point) -> Self::Output;
}
