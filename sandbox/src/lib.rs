#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod app;
pub mod driver;
pub mod input;
pub mod physics;
pub mod render;
pub mod sandbox;
pub mod settings;
pub mod units;
pub mod utils;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;
pub use nalgebra;
pub use rapier2d;
