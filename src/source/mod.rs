//! Fuente de documentos de turnos.
//!
//! La fuente entrega los documentos cuyo campo `fecha` coincide con alguna de
//! las fechas de la ventana en formato `dd/mm/yyyy`.

use std::fs;
use std::path::PathBuf;

use log::debug;
use serde_json::Value;

use crate::error::ReportError;
use crate::models::{RegistroCrudo, SemanaVentana};

pub trait FuenteTurnos: Send + Sync {
    fn turnos_en(&self, ventana: &SemanaVentana) -> Result<Vec<RegistroCrudo>, ReportError>;
}

fn coincide_fecha(doc: &RegistroCrudo, fechas: &[String]) -> bool {
    matches!(doc.get("fecha"), Some(Value::String(f)) if fechas.iter().any(|x| x == f))
}

/// Archivo JSON con un arreglo de documentos. Se relee en cada consulta.
#[derive(Debug, Clone)]
pub struct ArchivoJson {
    path: PathBuf,
}

impl ArchivoJson {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl FuenteTurnos for ArchivoJson {
    fn turnos_en(&self, ventana: &SemanaVentana) -> Result<Vec<RegistroCrudo>, ReportError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ReportError::FuenteIo {
            path: self.path.clone(),
            source,
        })?;
        let docs: Vec<Value> = serde_json::from_str(&contents)?;

        let fechas = ventana.fechas_texto();
        let mut out = Vec::new();
        for (i, doc) in docs.into_iter().enumerate() {
            let Value::Object(mut d) = doc else {
                continue;
            };
            if !coincide_fecha(&d, &fechas) {
                continue;
            }
            d.entry("id").or_insert_with(|| Value::String(i.to_string()));
            out.push(d);
        }
        debug!("{} documentos en {:?} para {:?}", out.len(), self.path, fechas);
        Ok(out)
    }
}

/// Documentos ya cargados en memoria.
#[derive(Debug, Clone, Default)]
pub struct EnMemoria(pub Vec<RegistroCrudo>);

impl FuenteTurnos for EnMemoria {
    fn turnos_en(&self, ventana: &SemanaVentana) -> Result<Vec<RegistroCrudo>, ReportError> {
        let fechas = ventana.fechas_texto();
        Ok(self
            .0
            .iter()
            .filter(|d| coincide_fecha(d, &fechas))
            .cloned()
            .collect())
    }
}
