//! Plantilla xlsx cargada con umya-spreadsheet.
//!
//! Cada reporte abre su propia copia de la plantilla; el libro nunca se
//! comparte entre peticiones.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use log::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::io::parse_a1_range;
use super::{CellValue, Grid, MergedRegion};
use crate::error::ReportError;

pub struct Plantilla {
    book: Spreadsheet,
    hoja: String,
}

impl Plantilla {
    pub fn abrir<P: AsRef<Path>>(path: P, hoja: &str) -> Result<Self, ReportError> {
        let path = path.as_ref();
        debug!("abriendo plantilla {:?} (hoja '{}')", path, hoja);
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| {
            ReportError::PlantillaIlegible {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            book,
            hoja: hoja.to_string(),
        })
    }

    pub fn desde_bytes(bytes: &[u8], hoja: &str) -> Result<Self, ReportError> {
        let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
            .map_err(|source| ReportError::PlantillaIlegible {
                path: PathBuf::from("<memoria>"),
                source,
            })?;
        Ok(Self {
            book,
            hoja: hoja.to_string(),
        })
    }

    /// Hoja de trabajo como `Grid` editable.
    pub fn hoja(&mut self) -> Result<UmyaGrid<'_>, ReportError> {
        let ws = self
            .book
            .get_sheet_by_name_mut(&self.hoja)
            .ok_or_else(|| ReportError::HojaNoEncontrada(self.hoja.clone()))?;
        let merges = ws
            .get_merge_cells()
            .iter()
            .filter_map(|r| parse_a1_range(&r.get_range()))
            .collect();
        Ok(UmyaGrid { ws, merges })
    }

    /// Serializa el libro completo a bytes xlsx.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&self.book, &mut cursor)
            .map_err(ReportError::Guardar)?;
        Ok(cursor.into_inner())
    }
}

/// Vista `Grid` sobre una hoja de umya. umya direcciona celdas como (columna, fila).
/// Las combinaciones se leen una vez al abrir la hoja; el generador no las modifica.
pub struct UmyaGrid<'a> {
    ws: &'a mut Worksheet,
    merges: Vec<MergedRegion>,
}

impl Grid for UmyaGrid<'_> {
    fn merged_regions(&self) -> &[MergedRegion] {
        &self.merges
    }

    fn value(&self, row: u32, col: u32) -> Option<CellValue> {
        let cell = self.ws.get_cell((col, row))?;
        if let Some(n) = cell.get_value_number() {
            return Some(CellValue::Number(n));
        }
        let text = cell.get_value();
        if text.is_empty() {
            None
        } else {
            Some(CellValue::Text(text.into_owned()))
        }
    }

    fn set_value(&mut self, row: u32, col: u32, value: Option<CellValue>) {
        let cell = self.ws.get_cell_mut((col, row));
        match value {
            Some(CellValue::Text(s)) => {
                cell.set_value_string(s);
            }
            Some(CellValue::Number(n)) => {
                cell.set_value_number(n);
            }
            None => {
                // vacía el valor y conserva el estilo de la celda
                cell.set_cell_value(umya_spreadsheet::CellValue::default());
            }
        }
    }

    fn extent(&self) -> (u32, u32) {
        let (col, row) = self.ws.get_highest_column_and_row();
        (row, col)
    }
}
