use anyhow::Result;
use eframe::egui;

use crate::config::PageConfig;
use crate::data::loader;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Fraction of the central panel reserved for the preview table.
const TABLE_HEIGHT_FRACTION: f32 = 0.35;

pub struct PairGridApp {
    pub state: AppState,
}

impl PairGridApp {
    /// Load the bundled dataset and build the initial state.
    pub fn new(config: PageConfig) -> Result<Self> {
        let dataset = loader::load_bundled()?;
        Ok(Self {
            state: AppState::new(config, dataset),
        })
    }
}

impl eframe::App for PairGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: display options ----
        egui::SidePanel::left("options_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview table above the pair grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::about_section(ui);
            ui.add_space(4.0);

            ui.heading("1) Data preview");
            let table_height = ui.available_height() * TABLE_HEIGHT_FRACTION;
            ui.scope(|ui| {
                ui.set_max_height(table_height);
                table::preview_table(ui, &self.state);
            });

            ui.separator();
            ui.heading("2) Pairwise scatter matrix");
            plot::pair_grid(ui, &self.state);
        });
    }
}
