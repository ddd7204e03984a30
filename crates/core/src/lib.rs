//! Capture-readiness decision engine over per-frame face-detector signals.

pub mod decision;
pub mod shared;
