//! Interactive pairwise scatter-matrix explorer for the bundled Iris
//! dataset: a preview table plus an N×N grid of per-species histograms and
//! scatterplots over a user-chosen feature subset.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod grid;
pub mod state;
pub mod ui;
