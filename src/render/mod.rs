//! Synthesis entry point and the background render worker

/// Single-pass synthesis from a request to an RGB raster
pub mod synthesis;
/// Background worker where the newest request wins
pub mod worker;

pub use synthesis::{SynthesisRequest, synthesize};
pub use worker::{RenderResult, RenderWorker};
