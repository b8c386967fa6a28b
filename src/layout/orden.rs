use std::collections::HashMap;

use crate::models::{Empleado, Turno};

/// Prioridad por cargo; cualquier otro cargo (o vacío) va al final.
pub const PRIORIDAD_CARGO: [(&str, u8); 3] = [("supervisor", 0), ("full-time", 1), ("part-time", 2)];
pub const PRIORIDAD_OTROS: u8 = 3;

pub fn prioridad_cargo(cargo: &str) -> u8 {
    let cargo = cargo.to_lowercase();
    PRIORIDAD_CARGO
        .iter()
        .find(|(c, _)| *c == cargo)
        .map(|(_, p)| *p)
        .unwrap_or(PRIORIDAD_OTROS)
}

/// Acumulador por empleado mientras se recorren los turnos.
#[derive(Debug, Default)]
struct AcumuladorEmpleado {
    nombre: String,
    cargo: String,
}

impl AcumuladorEmpleado {
    fn nuevo(nombre: &str) -> Self {
        Self {
            nombre: nombre.to_string(),
            ..Self::default()
        }
    }

    fn observar(&mut self, cargo: &str) {
        if !cargo.is_empty() {
            self.cargo = cargo.to_string();
        }
    }
}

/// Empleados en orden de planilla y la fila base de cada uno.
#[derive(Debug, Clone, Default)]
pub struct OrdenEmpleados {
    empleados: Vec<Empleado>,
    filas: HashMap<String, u32>,
}

impl OrdenEmpleados {
    pub fn empleados(&self) -> &[Empleado] {
        &self.empleados
    }

    /// Fila base del bloque del empleado (búsqueda insensible a mayúsculas).
    pub fn fila_de(&self, nombre: &str) -> Option<u32> {
        self.filas.get(&nombre.to_lowercase()).copied()
    }

    /// (empleado, fila base) en orden de planilla.
    pub fn bloques(&self) -> impl Iterator<Item = (&Empleado, u32)> {
        self.empleados
            .iter()
            .filter_map(|e| self.fila_de(&e.nombre).map(|f| (e, f)))
    }

    pub fn len(&self) -> usize {
        self.empleados.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empleados.is_empty()
    }
}

/// Orden: (prioridad de cargo, nombre en minúsculas). El empleado N recibe el
/// bloque que empieza en `fila_inicio + N * alto_bloque`.
pub fn ordenar_empleados(turnos: &[Turno], fila_inicio: u32, alto_bloque: u32) -> OrdenEmpleados {
    let mut acumulados: HashMap<String, AcumuladorEmpleado> = HashMap::new();
    for t in turnos.iter().filter(|t| !t.nombre.is_empty()) {
        acumulados
            .entry(t.clave_empleado())
            .or_insert_with(|| AcumuladorEmpleado::nuevo(&t.nombre))
            .observar(&t.cargo);
    }

    let mut empleados: Vec<Empleado> = acumulados
        .into_values()
        .map(|a| Empleado {
            nombre: a.nombre,
            cargo: a.cargo,
        })
        .collect();
    empleados.sort_by_cached_key(|e| (prioridad_cargo(&e.cargo), e.nombre.to_lowercase()));

    let filas = empleados
        .iter()
        .enumerate()
        .map(|(i, e)| (e.nombre.to_lowercase(), fila_inicio + i as u32 * alto_bloque))
        .collect();

    OrdenEmpleados { empleados, filas }
}
