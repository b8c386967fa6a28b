use crate::excel::{write_cell, Grid};
use crate::models::{Jornada, Turno};

/// Escribe un turno en el bloque del empleado a partir de la columna del día.
///
/// Fila base: entrada | receso | salida. En turno partido la fila siguiente
/// lleva el segundo tramo (entrada y salida, sin receso) sólo si alguno de
/// los dos tiene valor. El estado va dos filas bajo la base.
pub fn escribir_turno<G: Grid + ?Sized>(grid: &mut G, fila_base: u32, col: u32, turno: &Turno) {
    let (entrada, salida) = match &turno.jornada {
        Jornada::Simple { entrada, salida } => (entrada, salida),
        Jornada::Partida { entrada1, salida1, .. } => (entrada1, salida1),
    };

    write_cell(grid, fila_base, col, entrada.as_str());
    write_cell(grid, fila_base, col + 1, turno.receso.as_str());
    write_cell(grid, fila_base, col + 2, salida.as_str());

    if let Jornada::Partida { entrada2, salida2, .. } = &turno.jornada {
        if !entrada2.is_empty() || !salida2.is_empty() {
            write_cell(grid, fila_base + 1, col, entrada2.as_str());
            write_cell(grid, fila_base + 1, col + 2, salida2.as_str());
        }
    }

    if !turno.estado.is_empty() {
        write_cell(grid, fila_base + 2, col, turno.estado.as_str());
    }
}
