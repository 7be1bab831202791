use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::MIN_ROWS;
use crate::data::model::{Feature, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – display options
// ---------------------------------------------------------------------------

/// Render the left options panel: row count, feature subset, styling.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display options");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Preview row count ----
            ui.strong("Rows to show");
            let max_rows = state.dataset.len();
            ui.add(
                egui::DragValue::new(&mut state.selection.row_count)
                    .range(MIN_ROWS..=max_rows)
                    .speed(1.0),
            );
            ui.add_space(8.0);

            // ---- Feature subset ----
            ui.strong("Features");
            for feature in Feature::ALL {
                let mut checked = state.selection.is_selected(feature);
                if ui.checkbox(&mut checked, feature.label()).changed() {
                    state.selection.toggle_feature(feature);
                }
            }
            if !state.selection.grid_ready() {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "Select at least two features to draw the pair grid.",
                );
            }
            ui.add_space(8.0);

            // ---- Scatter styling ----
            ui.strong("Scatter style");
            ui.add(
                egui::Slider::new(&mut state.selection.alpha, 0.1..=1.0)
                    .step_by(0.1)
                    .text("Alpha"),
            );
            ui.add(
                egui::Slider::new(&mut state.selection.marker_size, 5.0..=50.0)
                    .step_by(1.0)
                    .text("Marker size"),
            );
            ui.separator();

            // ---- Species legend ----
            ui.strong("Species");
            for (name, color) in state.color_map.legend_entries() {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(12.0, 12.0),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 2.0, color);
                    ui.label(RichText::new(name).italics());
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: title, dataset summary, reset.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(state.config.title);
        ui.separator();

        ui.label(format!(
            "{} records · {} species · {} of {} features selected",
            state.dataset.len(),
            Species::ALL.len(),
            state.selection.features.len(),
            Feature::ALL.len(),
        ));

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.reset_selection();
        }
    });
}

// ---------------------------------------------------------------------------
// About section
// ---------------------------------------------------------------------------

/// Collapsible introduction shown above the preview table.
pub fn about_section(ui: &mut Ui) {
    egui::CollapsingHeader::new("About the Iris dataset")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "The Iris dataset, collected by R.A. Fisher in the 1930s, is a \
                 classic introductory dataset for classification. It holds 150 \
                 specimens of three iris species (setosa, versicolor, virginica), \
                 each measured on four features: sepal length, sepal width, petal \
                 length and petal width, all in centimetres.",
            );
            ui.add_space(4.0);
            ui.label(
                "Use the pair grid to spot which feature pairs separate the \
                 species best: clusters that do not overlap make good inputs for \
                 a classifier. Petal length × petal width usually separates the \
                 three species almost perfectly.",
            );
        });
}
