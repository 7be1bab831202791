use eframe::egui::{ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::model::Species;
use crate::grid::{CellKind, GridCell, histogram, plan_grid};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pairwise grid (central panel, lower section)
// ---------------------------------------------------------------------------

/// Minimum side length of one grid cell, in points.
const MIN_CELL_SIZE: f32 = 150.0;

/// Spacing between adjacent cells, keeping axis labels from overlapping.
const CELL_SPACING: f32 = 8.0;

/// Render the full N×N pairwise grid, or an advisory when fewer than two
/// features are selected.
pub fn pair_grid(ui: &mut Ui, state: &AppState) {
    let Some(cells) = plan_grid(&state.selection.features) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select at least two features to draw the pair grid.");
        });
        return;
    };

    let n = state.selection.features.len();

    // Square cells sized to fit the panel, scrolling when they would
    // drop below a readable size.
    let avail = ui.available_size();
    let fit = (avail.x.min(avail.y) - CELL_SPACING * n as f32) / n as f32;
    let cell_size = fit.max(MIN_CELL_SIZE);

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            eframe::egui::Grid::new("pair_grid")
                .spacing([CELL_SPACING, CELL_SPACING])
                .show(ui, |ui: &mut Ui| {
                    for row in 0..n {
                        for col in 0..n {
                            draw_cell(ui, state, &cells[row * n + col], cell_size);
                        }
                        ui.end_row();
                    }
                });
        });
}

fn draw_cell(ui: &mut Ui, state: &AppState, cell: &GridCell, size: f32) {
    let mut plot = Plot::new(("pair_cell", cell.row, cell.col))
        .width(size)
        .height(size)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false);

    if cell.x_label {
        plot = plot.x_axis_label(cell.x.label());
    }
    if cell.y_label {
        plot = plot.y_axis_label(cell.y.label());
    }
    if cell.legend {
        // The one legend of the grid, anchored at this cell's corner.
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| match cell.kind {
        CellKind::Histogram => draw_histograms(plot_ui, state, cell),
        CellKind::Scatter => draw_scatter(plot_ui, state, cell),
    });
}

/// Diagonal cell: per-species histograms of `cell.x`, overlaid with the
/// fixed transparency so the distributions stay readable.
fn draw_histograms(plot_ui: &mut egui_plot::PlotUi, state: &AppState, cell: &GridCell) {
    for species in Species::ALL {
        let values = state.dataset.species_values(cell.x, species);
        let bins = histogram(&values, state.config.hist_bins);
        let color = state
            .color_map
            .color_for(species)
            .gamma_multiply(state.config.hist_alpha);

        let bars: Vec<Bar> = bins
            .iter()
            .map(|b| Bar::new(b.center, b.count as f64).width(b.width))
            .collect();

        plot_ui.bar_chart(
            BarChart::new(bars)
                .name(species.name())
                .color(color),
        );
    }
}

/// Off-diagonal cell: per-species scatter of (x, y) with the caller-chosen
/// marker size and alpha.
fn draw_scatter(plot_ui: &mut egui_plot::PlotUi, state: &AppState, cell: &GridCell) {
    let radius = marker_radius(state.selection.marker_size);

    for species in Species::ALL {
        let pts = state.dataset.species_points(cell.x, cell.y, species);
        let color = state
            .color_map
            .color_for(species)
            .gamma_multiply(state.selection.alpha);

        let points: PlotPoints = pts.into_iter().collect();
        plot_ui.points(
            Points::new(points)
                .name(species.name())
                .color(color)
                .radius(radius)
                .filled(true),
        );
    }
}

/// The marker-size control is an area (pt², matching the common scatter-size
/// convention); convert to the point radius the plot library expects.
fn marker_radius(marker_size: f32) -> f32 {
    (marker_size / std::f32::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_radius_grows_with_size() {
        assert!(marker_radius(50.0) > marker_radius(5.0));
        // Default size of 18 pt² lands around a 2.4 pt radius.
        assert!((marker_radius(18.0) - 2.39).abs() < 0.05);
    }
}
