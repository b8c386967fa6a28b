//! Compilación de la planilla semanal sobre la hoja de la plantilla.
//!
//! Flujo: normalizar turnos -> limpiar área de datos -> encabezados ->
//! orden de empleados -> por empleado, un bloque de filas y un turno por día.

/// Orden de empleados y asignación de bloques
pub mod orden;

/// Día de la semana -> columna, encabezado de días
pub mod columnas;

/// Escritura de un turno (simple o partido)
pub mod turno;

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

use crate::excel::{clear_data_area, write_cell, Grid};
use crate::models::{RegistroCrudo, SemanaVentana, Turno};
use crate::normalize::normalizar_turnos;

pub use columnas::{columna_para, escribir_encabezado_dias};
pub use orden::{ordenar_empleados, prioridad_cargo, OrdenEmpleados};
pub use turno::escribir_turno;

/// Coordenadas fijas de la plantilla (1-based). `Default` corresponde a la
/// plantilla de programación y control de horas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    pub celda_mes: (u32, u32),
    pub celda_rango: (u32, u32),
    pub fila_dias: u32,
    pub fila_inicio: u32,
    pub columna_datos: u32,
    pub alto_bloque: u32,
    pub columna_nombre: u32,
    /// Lunes..domingo -> columna de entrada del día.
    pub columnas_dia: [Option<u32>; 7],
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            celda_mes: (5, 16),
            celda_rango: (5, 24),
            fila_dias: 6,
            fila_inicio: 11,
            columna_datos: 3,
            alto_bloque: 5,
            columna_nombre: 2,
            columnas_dia: [Some(3), Some(7), Some(11), Some(15), Some(19), Some(23), Some(27)],
        }
    }
}

/// Resultado de una pasada de layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumenPlanilla {
    pub empleados: usize,
    pub turnos_escritos: usize,
    pub descartados: usize,
    pub fechas: Vec<NaiveDate>,
}

/// Agrupa por empleado (clave en minúsculas) y ordena cada grupo por fecha.
pub fn agrupar_por_empleado(turnos: &[Turno]) -> HashMap<String, Vec<&Turno>> {
    let mut grupos: HashMap<String, Vec<&Turno>> = HashMap::new();
    for t in turnos {
        grupos.entry(t.clave_empleado()).or_default().push(t);
    }
    for g in grupos.values_mut() {
        g.sort_by_key(|t| t.fecha);
    }
    grupos
}

/// Compila los documentos de turnos sobre `grid`.
pub fn generar_planilla<G: Grid + ?Sized>(
    grid: &mut G,
    ventana: &SemanaVentana,
    registros: &[RegistroCrudo],
    layout: &TemplateLayout,
) -> ResumenPlanilla {
    let (turnos, descartados) = normalizar_turnos(registros);

    clear_data_area(grid, layout.fila_inicio, layout.columna_datos);

    let (r, c) = layout.celda_mes;
    write_cell(grid, r, c, ventana.etiqueta_mes());
    let (r, c) = layout.celda_rango;
    write_cell(grid, r, c, ventana.etiqueta_rango());

    let fechas = escribir_encabezado_dias(grid, &turnos, layout);

    let orden = ordenar_empleados(&turnos, layout.fila_inicio, layout.alto_bloque);
    let grupos = agrupar_por_empleado(&turnos);

    let mut turnos_escritos = 0usize;
    for (empleado, fila_base) in orden.bloques() {
        write_cell(grid, fila_base, layout.columna_nombre, empleado.nombre.as_str());
        if !empleado.cargo.is_empty() {
            write_cell(grid, fila_base + 1, layout.columna_nombre, empleado.cargo.as_str());
        }

        let Some(propios) = grupos.get(&empleado.nombre.to_lowercase()) else {
            continue;
        };
        for t in propios {
            let Some(col) = columna_para(layout, t.fecha) else {
                debug!("sin columna para {} ({})", t.fecha, empleado.nombre);
                continue;
            };
            escribir_turno(grid, fila_base, col, t);
            turnos_escritos += 1;
        }
    }

    info!(
        "planilla {} - {}: {} empleados, {} turnos, {} descartados",
        ventana.inicio,
        ventana.fin,
        orden.len(),
        turnos_escritos,
        descartados
    );

    ResumenPlanilla {
        empleados: orden.len(),
        turnos_escritos,
        descartados,
        fechas,
    }
}
