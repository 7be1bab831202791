use crate::data::model::Feature;

// ---------------------------------------------------------------------------
// Pairwise grid planner
// ---------------------------------------------------------------------------
//
// Pure layout logic for the N×N scatter-matrix: which feature pair each cell
// shows, which cells carry axis labels, and which single cell hosts the
// legend.  Kept free of egui types so it can be tested directly.

/// What a single grid cell draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Diagonal cell: per-species histograms of one feature.
    Histogram,
    /// Off-diagonal cell: per-species scatter of (x, y).
    Scatter,
}

/// One cell of the planned grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Horizontal-axis feature (= `features[col]`).
    pub x: Feature,
    /// Vertical-axis feature (= `features[row]`).
    pub y: Feature,
    pub kind: CellKind,
    /// Draw the x-axis label (bottom row only).
    pub x_label: bool,
    /// Draw the y-axis label (left column, off-diagonal only; diagonal
    /// cells show a count axis instead).
    pub y_label: bool,
    /// Host the one legend of the grid (top-right cell only).
    pub legend: bool,
}

/// Plan the N×N grid for an ordered feature selection, row-major.
///
/// Returns `None` when fewer than two features are selected; the caller is
/// expected to skip rendering and surface an advisory instead.
pub fn plan_grid(features: &[Feature]) -> Option<Vec<GridCell>> {
    let n = features.len();
    if n < 2 {
        return None;
    }

    let mut cells = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let diagonal = row == col;
            cells.push(GridCell {
                row,
                col,
                x: features[col],
                y: features[row],
                kind: if diagonal {
                    CellKind::Histogram
                } else {
                    CellKind::Scatter
                },
                x_label: row == n - 1,
                y_label: col == 0 && !diagonal,
                legend: row == 0 && col == n - 1,
            });
        }
    }
    Some(cells)
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One histogram bar: centre position, bar width and sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width intervals over their own range,
/// matching the per-series binning of the diagonal cells.
///
/// A degenerate range (all values equal, or a single value) collapses to one
/// bin of unit width holding everything.  Empty input yields no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return vec![HistBin {
            center: min,
            width: 1.0,
            count: values.len(),
        }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        // The maximum falls into the last bin, as with closed-right binning.
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Feature::*;

    #[test]
    fn fewer_than_two_features_yields_no_grid() {
        assert_eq!(plan_grid(&[]), None);
        assert_eq!(plan_grid(&[PetalLength]), None);
    }

    #[test]
    fn full_selection_yields_sixteen_cells() {
        let cells = plan_grid(&Feature::ALL).unwrap();
        assert_eq!(cells.len(), 16);
        let hists = cells.iter().filter(|c| c.kind == CellKind::Histogram).count();
        assert_eq!(hists, 4);
        assert_eq!(cells.len() - hists, 12);
    }

    #[test]
    fn two_feature_selection_yields_four_cells() {
        let cells = plan_grid(&[PetalLength, PetalWidth]).unwrap();
        assert_eq!(cells.len(), 4);
        let hists = cells.iter().filter(|c| c.kind == CellKind::Histogram).count();
        assert_eq!(hists, 2);
    }

    #[test]
    fn cell_axes_follow_row_and_column() {
        let feats = [SepalLength, SepalWidth, PetalLength];
        let cells = plan_grid(&feats).unwrap();
        for cell in &cells {
            assert_eq!(cell.x, feats[cell.col]);
            assert_eq!(cell.y, feats[cell.row]);
            assert_eq!(cell.kind == CellKind::Histogram, cell.row == cell.col);
        }
    }

    #[test]
    fn swapping_indices_mirrors_the_pair() {
        let feats = Feature::ALL;
        let n = feats.len();
        let cells = plan_grid(&feats).unwrap();
        for i in 0..n {
            for j in 0..n {
                let a = &cells[i * n + j];
                let b = &cells[j * n + i];
                assert_eq!(a.x, b.y);
                assert_eq!(a.y, b.x);
            }
        }
    }

    #[test]
    fn axis_labels_only_on_outer_edge() {
        let feats = [SepalLength, SepalWidth, PetalLength];
        let n = feats.len();
        let cells = plan_grid(&feats).unwrap();
        for cell in &cells {
            assert_eq!(cell.x_label, cell.row == n - 1);
            assert_eq!(cell.y_label, cell.col == 0 && cell.row != cell.col);
        }
    }

    #[test]
    fn exactly_one_legend_cell_at_top_right() {
        let cells = plan_grid(&Feature::ALL).unwrap();
        let legends: Vec<_> = cells.iter().filter(|c| c.legend).collect();
        assert_eq!(legends.len(), 1);
        assert_eq!((legends[0].row, legends[0].col), (0, 3));
    }

    #[test]
    fn histogram_counts_sum_to_input_length() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64).sin() * 3.0).collect();
        let bins = histogram(&values, 12);
        assert_eq!(bins.len(), 12);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn histogram_maximum_lands_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0], 3);
        assert_eq!(bins.last().unwrap().count, 2); // 2.0 (edge) rounds down, 3.0 is max
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn histogram_degenerate_range_collapses_to_one_bin() {
        let bins = histogram(&[2.5, 2.5, 2.5], 12);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].center, 2.5);
    }

    #[test]
    fn histogram_empty_input_yields_no_bins() {
        assert!(histogram(&[], 12).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }
}
