pub mod args;
pub mod sampler_controller;
