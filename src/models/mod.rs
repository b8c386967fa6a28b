// Estructuras de datos principales

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::ReportError;

/// Documento tal como llega de la fuente (claves con distintas grafías).
pub type RegistroCrudo = serde_json::Map<String, serde_json::Value>;

const MESES: [&str; 12] = [
    "ENERO", "FEBRERO", "MARZO", "ABRIL", "MAYO", "JUNIO",
    "JULIO", "AGOSTO", "SEPTIEMBRE", "OCTUBRE", "NOVIEMBRE", "DICIEMBRE",
];

/// Horas de un turno. Un turno partido tiene dos tramos entrada/salida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Jornada {
    Simple {
        entrada: String,
        salida: String,
    },
    Partida {
        entrada1: String,
        salida1: String,
        entrada2: String,
        salida2: String,
    },
}

/// Turno normalizado: un empleado en una fecha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turno {
    pub id: Option<String>,
    pub nombre: String,
    pub cargo: String,
    pub fecha: NaiveDate,
    pub jornada: Jornada,
    /// Receso ya canonicalizado ("30", "" o el texto original).
    pub receso: String,
    pub estado: String,
}

impl Turno {
    /// Clave de agrupación por empleado (insensible a mayúsculas).
    pub fn clave_empleado(&self) -> String {
        self.nombre.to_lowercase()
    }
}

/// Empleado derivado de los turnos: nombre visible y último cargo no vacío.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Empleado {
    pub nombre: String,
    pub cargo: String,
}

/// Rango de fechas inclusivo que define el reporte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemanaVentana {
    pub inicio: NaiveDate,
    pub fin: NaiveDate,
}

impl SemanaVentana {
    pub fn new(inicio: NaiveDate, fin: NaiveDate) -> Result<Self, ReportError> {
        if fin < inicio {
            return Err(ReportError::VentanaInvalida { inicio, fin });
        }
        Ok(Self { inicio, fin })
    }

    /// Todas las fechas del rango, en orden.
    pub fn dias(&self) -> Vec<NaiveDate> {
        let total = (self.fin - self.inicio).num_days();
        (0..=total).map(|d| self.inicio + Duration::days(d)).collect()
    }

    /// Fechas del rango en el formato `dd/mm/yyyy` que usa la fuente.
    pub fn fechas_texto(&self) -> Vec<String> {
        self.dias()
            .iter()
            .map(|d| d.format("%d/%m/%Y").to_string())
            .collect()
    }

    /// Nombre del mes de inicio, en mayúsculas ("ENERO").
    pub fn etiqueta_mes(&self) -> &'static str {
        MESES[self.inicio.month0() as usize]
    }

    /// Texto del rango: "del 15 al 21".
    pub fn etiqueta_rango(&self) -> String {
        format!("del {} al {}", self.inicio.day(), self.fin.day())
    }
}
