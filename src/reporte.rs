//! Generación completa del reporte: fuente -> plantilla -> layout -> bytes.

use log::info;

use crate::config::AppConfig;
use crate::error::ReportError;
use crate::excel::Plantilla;
use crate::layout::{generar_planilla, ResumenPlanilla, TemplateLayout};
use crate::models::SemanaVentana;
use crate::source::FuenteTurnos;

/// Aplica los turnos de la ventana sobre una plantilla ya abierta y devuelve
/// el libro serializado.
pub fn generar_en_plantilla(
    mut plantilla: Plantilla,
    ventana: &SemanaVentana,
    fuente: &dyn FuenteTurnos,
    layout: &TemplateLayout,
) -> Result<(Vec<u8>, ResumenPlanilla), ReportError> {
    let registros = fuente.turnos_en(ventana)?;
    let resumen = {
        let mut hoja = plantilla.hoja()?;
        generar_planilla(&mut hoja, ventana, &registros, layout)
    };
    let bytes = plantilla.to_bytes()?;
    Ok((bytes, resumen))
}

/// Abre la plantilla configurada (una copia nueva por llamada) y genera el xlsx.
pub fn generar_excel(
    config: &AppConfig,
    ventana: &SemanaVentana,
    fuente: &dyn FuenteTurnos,
) -> Result<Vec<u8>, ReportError> {
    let plantilla = Plantilla::abrir(&config.plantilla, &config.hoja)?;
    let (bytes, resumen) = generar_en_plantilla(plantilla, ventana, fuente, &config.layout)?;
    info!(
        "excel generado ({} bytes, {} empleados)",
        bytes.len(),
        resumen.empleados
    );
    Ok(bytes)
}
