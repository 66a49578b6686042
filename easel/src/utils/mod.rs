pub mod color;
pub mod json;
pub mod math;
pub mod storage;
