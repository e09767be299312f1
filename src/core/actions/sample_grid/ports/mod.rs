pub mod point_algorithm;
