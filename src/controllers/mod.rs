//! Application layer: turns a [`SamplerConfig`](crate::SamplerConfig) into
//! samples and hands them to presenters through the ports in [`ports`].

pub mod cli;
pub mod ports;
