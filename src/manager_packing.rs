use crate::models::{Orientation, PackingResult, PanelSpec, RectSurface};

/// Returns how many panels fit on a rectangular surface in a regular grid
///
/// The same clearance is kept to every edge and between neighbouring panels,
/// so N panels on an axis need N panel widths plus (N-1) gaps inside the
/// edge-cleared span. Rearranged to a single division per axis:
/// `floor((avail + clearance) / (panel_dim + clearance))`.
///
/// This is a conservative grid estimate, not an optimal packing; it never
/// rotates individual panels or fills partial rows.
///
/// # Arguments
///
/// * 'surface' - rooftop rectangle in meters
/// * 'panel' - panel dimensions and orientation
/// * 'clearance' - edge and inter-panel spacing in meters, negative treated as 0
pub fn pack(surface: &RectSurface, panel: &PanelSpec, clearance: f64) -> PackingResult {
    let clearance = clearance.max(0.0);

    let (panel_w, panel_h) = match panel.orientation {
        Orientation::Portrait => (panel.width_m, panel.height_m),
        Orientation::Landscape => (panel.height_m, panel.width_m),
    };

    let avail_w = (surface.width_m - 2.0 * clearance).max(0.0);
    let avail_h = (surface.height_m - 2.0 * clearance).max(0.0);

    let cols = count_axis(avail_w, panel_w, clearance);
    let rows = count_axis(avail_h, panel_h, clearance);

    PackingResult { count: rows * cols, rows, cols }
}

/// Panels fitting along one axis, 0 when the panel dimension is degenerate
fn count_axis(avail: f64, panel_dim: f64, clearance: f64) -> u32 {
    if panel_dim <= 0.0 {
        return 0;
    }

    (((avail + clearance) / (panel_dim + clearance)).floor()).max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(orientation: Orientation) -> PanelSpec {
        PanelSpec { width_m: 1.1, height_m: 1.75, wattage_w: 400.0, orientation }
    }

    #[test]
    fn reference_roof_fits_18_panels() {
        // 10 x 8 m roof, 1.1 x 1.75 m portrait panel, 0.4 m clearance:
        // cols = floor((9.2 + 0.4) / (1.1 + 0.4)) = 6
        // rows = floor((7.2 + 0.4) / (1.75 + 0.4)) = 3
        let surface = RectSurface { width_m: 10.0, height_m: 8.0 };
        let result = pack(&surface, &panel(Orientation::Portrait), 0.4);

        assert_eq!(result, PackingResult { count: 18, rows: 3, cols: 6 });
    }

    #[test]
    fn landscape_swaps_panel_dimensions() {
        let surface = RectSurface { width_m: 10.0, height_m: 8.0 };
        let result = pack(&surface, &panel(Orientation::Landscape), 0.4);

        // cols = floor(9.6 / 2.15) = 4, rows = floor(7.6 / 1.5) = 5
        assert_eq!(result, PackingResult { count: 20, rows: 5, cols: 4 });
    }

    #[test]
    fn count_is_rows_times_cols() {
        let surface = RectSurface { width_m: 12.3, height_m: 7.7 };
        for clearance in [0.0, 0.1, 0.25, 0.5, 1.0] {
            let result = pack(&surface, &panel(Orientation::Portrait), clearance);
            assert_eq!(result.count, result.rows * result.cols);
        }
    }

    #[test]
    fn increasing_clearance_never_increases_count() {
        let surface = RectSurface { width_m: 10.0, height_m: 8.0 };
        let mut previous = u32::MAX;
        for step in 0..20 {
            let clearance = step as f64 * 0.1;
            let count = pack(&surface, &panel(Orientation::Portrait), clearance).count;
            assert!(
                count <= previous,
                "count {} at clearance {} exceeds count {} at smaller clearance",
                count,
                clearance,
                previous
            );
            previous = count;
        }
    }

    #[test]
    fn zero_clearance_packs_edge_to_edge() {
        let surface = RectSurface { width_m: 4.4, height_m: 3.5 };
        let result = pack(&surface, &panel(Orientation::Portrait), 0.0);
        assert_eq!(result, PackingResult { count: 8, rows: 2, cols: 4 });
    }

    #[test]
    fn degenerate_panel_dimensions_fit_zero_panels() {
        let surface = RectSurface { width_m: 10.0, height_m: 8.0 };
        let zero_width =
            PanelSpec { width_m: 0.0, height_m: 1.75, wattage_w: 400.0, orientation: Orientation::Portrait };
        let negative =
            PanelSpec { width_m: -1.0, height_m: 1.75, wattage_w: 400.0, orientation: Orientation::Portrait };

        assert_eq!(pack(&surface, &zero_width, 0.4).count, 0);
        assert_eq!(pack(&surface, &negative, 0.4).count, 0);
    }

    #[test]
    fn clearance_larger_than_surface_fits_zero_panels() {
        let surface = RectSurface { width_m: 2.0, height_m: 2.0 };
        let result = pack(&surface, &panel(Orientation::Portrait), 1.5);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn negative_clearance_is_treated_as_zero() {
        let surface = RectSurface { width_m: 4.4, height_m: 3.5 };
        let with_negative = pack(&surface, &panel(Orientation::Portrait), -0.5);
        let with_zero = pack(&surface, &panel(Orientation::Portrait), 0.0);
        assert_eq!(with_negative, with_zero);
    }
}
