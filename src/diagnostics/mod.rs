//! Diagnostics data model returned alongside recognition results.
//!
//! `RecognitionReport` describes one request: input geometry, the region
//! that was sampled, the outcome, and per-stage timings.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, RecognitionOutcome, RecognitionReport, RegionStage};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
