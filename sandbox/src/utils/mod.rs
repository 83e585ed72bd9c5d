pub mod color;
pub mod profiler;
