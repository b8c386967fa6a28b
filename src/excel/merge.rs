use super::{CellValue, Grid};

/// Esquina superior izquierda de la combinación que contiene (row, col), o la
/// misma celda si no está combinada.
pub fn resolve_anchor<G: Grid + ?Sized>(grid: &G, row: u32, col: u32) -> (u32, u32) {
    grid.merged_regions()
        .iter()
        .find(|mr| mr.contains(row, col))
        .map(|mr| mr.anchor())
        .unwrap_or((row, col))
}

/// Escribe en la celda ancla; nunca en una celda interior de una combinación.
pub fn write_cell<G, V>(grid: &mut G, row: u32, col: u32, value: V)
where
    G: Grid + ?Sized,
    V: Into<CellValue>,
{
    let (r0, c0) = resolve_anchor(grid, row, col);
    grid.set_value(r0, c0, Some(value.into()));
}
