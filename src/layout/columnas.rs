use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::TemplateLayout;
use crate::excel::{write_cell, Grid};
use crate::models::Turno;

/// Columna ancla del día de la semana de `fecha` (lunes = índice 0).
pub fn columna_para(layout: &TemplateLayout, fecha: NaiveDate) -> Option<u32> {
    let dia = fecha.weekday().num_days_from_monday() as usize;
    layout.columnas_dia.get(dia).copied().flatten()
}

/// Escribe el número de día de cada fecha presente en la fila de encabezado.
/// Devuelve las fechas distintas en orden ascendente.
pub fn escribir_encabezado_dias<G: Grid + ?Sized>(
    grid: &mut G,
    turnos: &[Turno],
    layout: &TemplateLayout,
) -> Vec<NaiveDate> {
    let fechas: BTreeSet<NaiveDate> = turnos.iter().map(|t| t.fecha).collect();
    for f in &fechas {
        if let Some(col) = columna_para(layout, *f) {
            write_cell(grid, layout.fila_dias, col, f.day());
        }
    }
    fechas.into_iter().collect()
}
