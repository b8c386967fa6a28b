use std::collections::HashSet;

use super::Grid;

/// Vacía toda celda desde (start_row, start_col) hasta la extensión actual de
/// la hoja, salvo las que pertenecen a alguna combinación (conservan su
/// formato y contenido).
pub fn clear_data_area<G: Grid + ?Sized>(grid: &mut G, start_row: u32, start_col: u32) {
    let merged: HashSet<(u32, u32)> = grid
        .merged_regions()
        .iter()
        .flat_map(|mr| mr.cells().collect::<Vec<_>>())
        .collect();

    let (max_row, max_col) = grid.extent();
    for r in start_row..=max_row {
        for c in start_col..=max_col {
            if !merged.contains(&(r, c)) {
                grid.set_value(r, c, None);
            }
        }
    }
}
