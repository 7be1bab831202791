use crate::color::ColorMap;
use crate::config::{MIN_ROWS, PageConfig};
use crate::data::model::{Feature, IrisDataset};

// ---------------------------------------------------------------------------
// Selection – the current display parameters
// ---------------------------------------------------------------------------

/// The user's current choice of features and display parameters.  Rebuilt
/// freely by the control widgets; the render pass only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Ordered subset of features to display.  Toggling a feature on
    /// appends it, so the grid follows selection order.
    pub features: Vec<Feature>,
    /// Requested preview row count (clamped at render time).
    pub row_count: usize,
    /// Scatter point transparency, in [0.1, 1.0].
    pub alpha: f32,
    /// Scatter marker size (area, pt²), in [5, 50].
    pub marker_size: f32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            features: Feature::ALL.to_vec(),
            row_count: 50,
            alpha: 0.7,
            marker_size: 18.0,
        }
    }
}

impl Selection {
    pub fn is_selected(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Toggle a feature in/out of the selection, preserving the order in
    /// which the remaining features were chosen.
    pub fn toggle_feature(&mut self, feature: Feature) {
        if let Some(pos) = self.features.iter().position(|&f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature);
        }
    }

    /// Whether enough features are selected for the pair grid to render.
    pub fn grid_ready(&self) -> bool {
        self.features.len() >= 2
    }
}

/// Clamp a requested preview row count to `[MIN_ROWS, dataset_len]`.
/// Never exceeds the dataset size, even when that is below the minimum.
pub fn clamp_row_count(requested: usize, dataset_len: usize) -> usize {
    requested
        .clamp(MIN_ROWS, dataset_len.max(MIN_ROWS))
        .min(dataset_len)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state.  The dataset and colour map are fixed for the whole
/// session; only the [`Selection`] changes between frames.
pub struct AppState {
    pub config: PageConfig,
    pub dataset: IrisDataset,
    pub color_map: ColorMap,
    pub selection: Selection,
}

impl AppState {
    pub fn new(config: PageConfig, dataset: IrisDataset) -> Self {
        log::info!(
            "Loaded {} records with {} features",
            dataset.len(),
            Feature::ALL.len()
        );
        Self {
            config,
            dataset,
            color_map: ColorMap::new(),
            selection: Selection::default(),
        }
    }

    /// Restore the default selection (all features, default styling).
    pub fn reset_selection(&mut self) {
        self.selection = Selection::default();
    }
}
