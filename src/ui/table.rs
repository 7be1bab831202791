use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, clamp_row_count};

// ---------------------------------------------------------------------------
// Preview table (central panel, upper section)
// ---------------------------------------------------------------------------

/// Render the first rows of the dataset restricted to the selected features
/// plus the species column, preserving record order.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    let n_rows = clamp_row_count(state.selection.row_count, state.dataset.len());
    let features = state.selection.features.clone();

    // Column count changes with the selection, so salt the table id.
    ui.push_id(("preview_table", features.len()), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(32.0))
            .columns(Column::remainder(), features.len() + 1)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for feature in &features {
                    header.col(|ui| {
                        ui.strong(feature.label());
                    });
                }
                header.col(|ui| {
                    ui.strong("species");
                });
            })
            .body(|body| {
                body.rows(18.0, n_rows, |mut row| {
                    let idx = row.index();
                    let record = &state.dataset.records[idx];
                    row.col(|ui| {
                        ui.monospace(idx.to_string());
                    });
                    for feature in &features {
                        row.col(|ui| {
                            ui.monospace(format!("{:.1}", record.value(*feature)));
                        });
                    }
                    row.col(|ui| {
                        let color = state.color_map.color_for(record.species);
                        ui.label(RichText::new(record.species.name()).color(color));
                    });
                });
            });
    });
}
