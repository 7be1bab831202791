// ---------------------------------------------------------------------------
// Page-level configuration
// ---------------------------------------------------------------------------

/// Row-count lower bound for the preview table.
pub const MIN_ROWS: usize = 10;

/// Fixed bin count for the diagonal histogram cells.
pub const HIST_BINS: usize = 12;

/// Fixed overlay transparency for the diagonal histogram cells.
pub const HIST_ALPHA: f32 = 0.5;

/// Immutable page-wide configuration, built once in `main` and passed down
/// to the rendering functions instead of living in ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Window / page title.
    pub title: &'static str,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Bin count for diagonal histograms.
    pub hist_bins: usize,
    /// Overlay alpha for diagonal histograms.
    pub hist_alpha: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Iris Pair Grid – Feature Explorer",
            window_size: [1280.0, 860.0],
            min_window_size: [700.0, 500.0],
            hist_bins: HIST_BINS,
            hist_alpha: HIST_ALPHA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_fixed_render_constants() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.hist_bins, 12);
        assert_eq!(cfg.hist_alpha, 0.5);
    }
}
