// #![allow(clippy::new_without_default)]
#[cfg(feature = "bitmap")]
pub mod bitmap;
pub mod capability;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod output;
pub mod palette;
pub mod vector;
