use std::env;
use std::path::PathBuf;

use crate::layout::TemplateLayout;

pub const DEFAULT_TEMPLATE: &str = "programacion-y-control-de-horas-actualizado.xlsx";
pub const DEFAULT_SHEET: &str = "Hoja1";
pub const DEFAULT_TURNOS: &str = "data/turnos.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuración de la aplicación. Se lee de variables de entorno (y `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub plantilla: PathBuf,
    pub hoja: String,
    pub turnos: PathBuf,
    pub bind: String,
    pub layout: TemplateLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plantilla: PathBuf::from(DEFAULT_TEMPLATE),
            hoja: DEFAULT_SHEET.to_string(),
            turnos: PathBuf::from(DEFAULT_TURNOS),
            bind: DEFAULT_BIND.to_string(),
            layout: TemplateLayout::default(),
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

fn var_no_vacia(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Honors PLANILLA_TEMPLATE / PLANILLA_SHEET / PLANILLA_TURNOS / PLANILLA_BIND.
    pub fn from_env() -> Self {
        load_dotenv();
        let base = Self::default();
        Self {
            plantilla: var_no_vacia("PLANILLA_TEMPLATE").map(PathBuf::from).unwrap_or(base.plantilla),
            hoja: var_no_vacia("PLANILLA_SHEET").unwrap_or(base.hoja),
            turnos: var_no_vacia("PLANILLA_TURNOS").map(PathBuf::from).unwrap_or(base.turnos),
            bind: var_no_vacia("PLANILLA_BIND").unwrap_or(base.bind),
            layout: base.layout,
        }
    }
}
