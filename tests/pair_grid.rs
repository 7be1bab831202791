use iris_pairgrid::color::ColorMap;
use iris_pairgrid::config::{HIST_BINS, PageConfig};
use iris_pairgrid::data::loader;
use iris_pairgrid::data::model::{Feature, Species};
use iris_pairgrid::grid::{CellKind, histogram, plan_grid};
use iris_pairgrid::state::{AppState, Selection, clamp_row_count};

#[test]
fn full_selection_plans_a_four_by_four_grid() {
    let dataset = loader::load_bundled().unwrap();
    let selection = Selection::default();
    assert!(selection.grid_ready());

    let cells = plan_grid(&selection.features).unwrap();
    assert_eq!(cells.len(), 16);

    let hists = cells
        .iter()
        .filter(|c| c.kind == CellKind::Histogram)
        .count();
    assert_eq!(hists, 4);
    assert_eq!(cells.len() - hists, 12);

    // Every cell draws from 50 records per species.
    for cell in &cells {
        for sp in Species::ALL {
            match cell.kind {
                CellKind::Histogram => {
                    let values = dataset.species_values(cell.x, sp);
                    assert_eq!(values.len(), 50);
                    let bins = histogram(&values, HIST_BINS);
                    assert_eq!(bins.len(), HIST_BINS);
                    let total: usize = bins.iter().map(|b| b.count).sum();
                    assert_eq!(total, 50);
                }
                CellKind::Scatter => {
                    let pts = dataset.species_points(cell.x, cell.y, sp);
                    assert_eq!(pts.len(), 50);
                }
            }
        }
    }
}

#[test]
fn petal_pair_selection_plans_a_mirrored_two_by_two_grid() {
    let mut selection = Selection {
        features: Vec::new(),
        ..Selection::default()
    };
    selection.toggle_feature(Feature::PetalLength);
    selection.toggle_feature(Feature::PetalWidth);

    let cells = plan_grid(&selection.features).unwrap();
    assert_eq!(cells.len(), 4);

    let hists: Vec<_> = cells
        .iter()
        .filter(|c| c.kind == CellKind::Histogram)
        .collect();
    assert_eq!(hists.len(), 2);

    // The two scatter cells mirror each other across the diagonal.
    let scatters: Vec<_> = cells
        .iter()
        .filter(|c| c.kind == CellKind::Scatter)
        .collect();
    assert_eq!(scatters.len(), 2);
    assert_eq!(scatters[0].x, scatters[1].y);
    assert_eq!(scatters[0].y, scatters[1].x);
}

#[test]
fn sparse_selection_suppresses_the_grid_but_not_the_table() {
    let dataset = loader::load_bundled().unwrap();
    let mut selection = Selection {
        features: Vec::new(),
        ..Selection::default()
    };
    assert_eq!(plan_grid(&selection.features), None);

    selection.toggle_feature(Feature::SepalWidth);
    assert!(!selection.grid_ready());
    assert_eq!(plan_grid(&selection.features), None);

    // The preview table still renders its clamped row range.
    let rows = clamp_row_count(selection.row_count, dataset.len());
    assert_eq!(rows, 50);
}

#[test]
fn species_colors_stay_fixed_across_a_render_pass() {
    let dataset = loader::load_bundled().unwrap();
    let state = AppState::new(PageConfig::default(), dataset);

    // Each cell consults the same map, so lookups repeated per cell must
    // agree with a freshly built map.
    let fresh = ColorMap::new();
    let cells = plan_grid(&state.selection.features).unwrap();
    for _cell in &cells {
        for sp in Species::ALL {
            assert_eq!(state.color_map.color_for(sp), fresh.color_for(sp));
        }
    }
}

#[test]
fn preview_rows_honour_the_clamp_bounds() {
    let dataset = loader::load_bundled().unwrap();
    assert_eq!(clamp_row_count(0, dataset.len()), 10);
    assert_eq!(clamp_row_count(1000, dataset.len()), 150);
    assert_eq!(clamp_row_count(80, dataset.len()), 80);
}
