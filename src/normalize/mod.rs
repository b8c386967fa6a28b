//! Normalización de campos de los documentos de turnos.
//!
//! Los documentos llegan con varias grafías históricas para el mismo campo
//! ("entrada", "ENTRADA", "HORA_ENTRADA", "horaEntrada"...). Cada campo lógico
//! tiene una lista ordenada de claves candidatas y `pick` devuelve la primera
//! que tenga un valor no vacío.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde_json::Value;

use crate::models::{Jornada, RegistroCrudo, Turno};

pub const FECHA: &[&str] = &["fecha", "FECHA"];
pub const NOMBRE: &[&str] = &["nombre", "NOMBRE"];
pub const CARGO: &[&str] = &["cargo", "CARGO"];
pub const ID: &[&str] = &["id"];
pub const USA_TURNO_PARTIDO: &[&str] = &["usaTurnoPartido", "USATURNOPARTIDO"];
pub const RECESO: &[&str] = &["receso", "HORA RECESO", "HORA_RECESO", "horaReceso"];
pub const ESTADO: &[&str] = &["estado", "ESTADO"];

pub const ENTRADA: &[&str] = &["entrada", "ENTRADA", "HORA_ENTRADA", "HORA ENTRADA", "horaEntrada"];
pub const SALIDA: &[&str] = &["salida", "SALIDA", "HORA_SALIDA", "HORA SALIDA", "horaSalida"];
pub const ENTRADA1: &[&str] = &["entrada1", "HORA ENTRADA 1", "HORA_ENTRADA_1", "horaEntrada1", "ENTRADA1"];
pub const SALIDA1: &[&str] = &["salida1", "HORA SALIDA 1", "HORA_SALIDA_1", "horaSalida1", "SALIDA1"];
pub const ENTRADA2: &[&str] = &["entrada2", "HORA ENTRADA 2", "HORA_ENTRADA_2", "horaEntrada2", "ENTRADA2"];
pub const SALIDA2: &[&str] = &["salida2", "HORA SALIDA 2", "HORA_SALIDA_2", "horaSalida2", "SALIDA2"];

const FORMATOS_FECHA: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];
const VERDADEROS: [&str; 8] = ["true", "1", "si", "sí", "y", "yes", "t", "on"];

/// Valores que pueden interpretarse como fecha de un turno.
pub trait ComoFecha {
    fn como_fecha(&self) -> Option<NaiveDate>;
}

impl ComoFecha for NaiveDate {
    fn como_fecha(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl ComoFecha for NaiveDateTime {
    fn como_fecha(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl ComoFecha for str {
    fn como_fecha(&self) -> Option<NaiveDate> {
        let s = self.trim();
        FORMATOS_FECHA
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }
}

impl ComoFecha for Value {
    fn como_fecha(&self) -> Option<NaiveDate> {
        match self {
            Value::String(s) => s.as_str().como_fecha(),
            _ => None,
        }
    }
}

/// Fecha nativa tal cual; texto probado contra `dd/mm/yyyy` y luego `yyyy-mm-dd`.
pub fn parse_date<T: ComoFecha + ?Sized>(value: &T) -> Option<NaiveDate> {
    value.como_fecha()
}

/// Nunca falla: cualquier valor no reconocido es `false`.
pub fn parse_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        other => {
            let s = value_to_string(other).trim().to_lowercase();
            VERDADEROS.contains(&s.as_str())
        }
    }
}

/// Representación textual de un valor JSON (sin comillas para strings).
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Primer valor presente, no nulo y no vacío entre `keys`; string vacío si no hay.
pub fn pick(record: &RegistroCrudo, keys: &[&str]) -> Value {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find(|v| !v.is_null() && !value_to_string(v).trim().is_empty())
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

/// Igual que `pick` pero ya convertido a texto recortado.
pub fn pick_str(record: &RegistroCrudo, keys: &[&str]) -> String {
    value_to_string(&pick(record, keys)).trim().to_string()
}

/// "30 minutos" -> "30", "no aplica" -> "", cualquier otro texto sin cambios.
pub fn canonical_receso(raw: &str) -> String {
    let s = raw.trim();
    match s.to_lowercase().as_str() {
        "30 minutos" => "30".to_string(),
        "no aplica" => String::new(),
        _ => s.to_string(),
    }
}

/// Convierte un documento en `Turno`. `None` si no tiene fecha interpretable.
pub fn normalizar_turno(record: &RegistroCrudo) -> Option<Turno> {
    let fecha = parse_date(&pick(record, FECHA))?;

    let jornada = if parse_bool(&pick(record, USA_TURNO_PARTIDO)) {
        Jornada::Partida {
            entrada1: pick_str(record, ENTRADA1),
            salida1: pick_str(record, SALIDA1),
            entrada2: pick_str(record, ENTRADA2),
            salida2: pick_str(record, SALIDA2),
        }
    } else {
        Jornada::Simple {
            entrada: pick_str(record, ENTRADA),
            salida: pick_str(record, SALIDA),
        }
    };

    let id = Some(pick_str(record, ID)).filter(|s| !s.is_empty());

    Some(Turno {
        id,
        nombre: pick_str(record, NOMBRE),
        cargo: pick_str(record, CARGO),
        fecha,
        jornada,
        receso: canonical_receso(&pick_str(record, RECESO)),
        estado: pick_str(record, ESTADO),
    })
}

/// Normaliza todos los documentos y descarta los que no tienen fecha válida.
/// Devuelve los turnos y la cantidad descartada.
pub fn normalizar_turnos(records: &[RegistroCrudo]) -> (Vec<Turno>, usize) {
    let mut turnos = Vec::with_capacity(records.len());
    let mut descartados = 0usize;
    for r in records {
        match normalizar_turno(r) {
            Some(t) => turnos.push(t),
            None => {
                descartados += 1;
                debug!("turno sin fecha válida descartado: {:?}", r.get("fecha"));
            }
        }
    }
    (turnos, descartados)
}
