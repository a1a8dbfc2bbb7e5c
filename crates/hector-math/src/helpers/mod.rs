//! Visualisation helpers.

pub mod coloring;
mod palettes;
