//! Errores del generador de planillas.
//!
//! Sólo los fallos de plantilla y de la fuente de turnos son errores: un
//! registro con fecha ilegible o campos vacíos se descarta en silencio.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// La plantilla no se pudo abrir; el error del motor se conserva intacto.
    #[error("no se pudo leer la plantilla {}: {source}", path.display())]
    PlantillaIlegible {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::reader::xlsx::XlsxError,
    },

    #[error("la plantilla no contiene la hoja '{0}'")]
    HojaNoEncontrada(String),

    #[error("no se pudo serializar la planilla: {0}")]
    Guardar(#[source] umya_spreadsheet::writer::xlsx::XlsxError),

    #[error("no se pudo leer la fuente de turnos {}: {source}", path.display())]
    FuenteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("la fuente de turnos no es JSON válido: {0}")]
    FuenteJson(#[from] serde_json::Error),

    #[error("fin ({fin}) es anterior a ini ({inicio})")]
    VentanaInvalida {
        inicio: chrono::NaiveDate,
        fin: chrono::NaiveDate,
    },
}
