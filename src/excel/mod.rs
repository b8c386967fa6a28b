//! Módulo `excel`: acceso a la hoja de la plantilla.
//!
//! Submódulos:
//! - `io`: helpers para referencias A1 ("C6", "C6:E8")
//! - `merge`: escritura consciente de celdas combinadas
//! - `clear`: limpieza del área de datos respetando combinaciones
//! - `memoria`: hoja en memoria (tests y herramientas)
//! - `plantilla`: adaptador sobre umya-spreadsheet
//!
//! Todas las coordenadas son 1-based (fila 1, columna 1 = "A1"), igual que la
//! plantilla de referencia.

/// Helpers de referencias A1
pub mod io;

/// `resolve_anchor` / `write_cell`
pub mod merge;

/// `clear_data_area`
pub mod clear;

/// Hoja en memoria
pub mod memoria;

/// Plantilla xlsx cargada con umya-spreadsheet
pub mod plantilla;

pub use clear::clear_data_area;
pub use memoria::MemoryGrid;
pub use merge::{resolve_anchor, write_cell};
pub use plantilla::{Plantilla, UmyaGrid};

/// Valor de una celda escrito por el generador.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

/// Región combinada rectangular, límites inclusivos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergedRegion {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl MergedRegion {
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Self {
        Self {
            min_row: min_row.min(max_row),
            min_col: min_col.min(max_col),
            max_row: min_row.max(max_row),
            max_col: min_col.max(max_col),
        }
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.min_row <= row && row <= self.max_row && self.min_col <= col && col <= self.max_col
    }

    pub fn anchor(&self) -> (u32, u32) {
        (self.min_row, self.min_col)
    }

    /// Todas las celdas cubiertas por la región.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |r| (self.min_col..=self.max_col).map(move |c| (r, c)))
    }
}

/// Hoja editable. Es la frontera con el motor de hojas de cálculo: el
/// generador sólo necesita combinaciones, lectura/escritura y extensión.
pub trait Grid {
    fn merged_regions(&self) -> &[MergedRegion];

    fn value(&self, row: u32, col: u32) -> Option<CellValue>;

    /// `None` deja la celda vacía.
    fn set_value(&mut self, row: u32, col: u32, value: Option<CellValue>);

    /// (última fila, última columna) en uso.
    fn extent(&self) -> (u32, u32);
}
