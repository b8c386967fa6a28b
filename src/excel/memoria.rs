use std::collections::BTreeMap;

use super::io::parse_a1_range;
use super::{CellValue, Grid, MergedRegion};

/// Hoja en memoria con las mismas reglas de extensión que una hoja real:
/// cualquier celda tocada (incluso para vaciarla) amplía la extensión.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: BTreeMap<(u32, u32), CellValue>,
    merges: Vec<MergedRegion>,
    max_row: u32,
    max_col: u32,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extent(max_row: u32, max_col: u32) -> Self {
        Self {
            max_row,
            max_col,
            ..Self::default()
        }
    }

    pub fn add_merge(&mut self, region: MergedRegion) -> &mut Self {
        self.touch(region.max_row, region.max_col);
        self.merges.push(region);
        self
    }

    /// Combina un rango en notación A1 ("C6:E6"). Rangos inválidos se ignoran.
    pub fn merge_a1(&mut self, range: &str) -> &mut Self {
        if let Some(region) = parse_a1_range(range) {
            self.add_merge(region);
        }
        self
    }

    /// Texto de la celda, vacío si no tiene valor.
    pub fn text(&self, row: u32, col: u32) -> String {
        self.cells
            .get(&(row, col))
            .map(CellValue::as_text)
            .unwrap_or_default()
    }

    /// Celdas con valor, ordenadas por (fila, columna).
    pub fn filled(&self) -> impl Iterator<Item = (&(u32, u32), &CellValue)> {
        self.cells.iter()
    }

    fn touch(&mut self, row: u32, col: u32) {
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }
}

impl Grid for MemoryGrid {
    fn merged_regions(&self) -> &[MergedRegion] {
        &self.merges
    }

    fn value(&self, row: u32, col: u32) -> Option<CellValue> {
        self.cells.get(&(row, col)).cloned()
    }

    fn set_value(&mut self, row: u32, col: u32, value: Option<CellValue>) {
        self.touch(row, col);
        match value {
            Some(v) => {
                self.cells.insert((row, col), v);
            }
            None => {
                self.cells.remove(&(row, col));
            }
        }
    }

    fn extent(&self) -> (u32, u32) {
        (self.max_row, self.max_col)
    }
}
