#![allow(clippy::type_complexity, clippy::too_many_arguments)]

pub mod app;
pub mod fourier;
pub mod geometry;
pub mod line;
pub mod mandelbrot;
pub mod raycast;
pub mod renderer;
pub mod rotation;
pub mod scene;
pub mod shooter;
pub mod utils;
pub mod window;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;
pub use tinyjson;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_break {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); break; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
