// src/segment/mod.rs
mod accumulator;
mod descriptor;

pub use accumulator::SegmentAccumulator;
pub use descriptor::SegmentDescriptor;
