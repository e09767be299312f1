pub mod colour;
pub mod domain;
pub mod escape_time;
pub mod grid;
pub mod pixel_buffer;
pub mod point;
pub mod sample_order;
pub mod samples;
