// Biblioteca raíz del crate `planilla_turnos`.
// Compila turnos por empleado y día sobre la plantilla xlsx de programación
// semanal y expone el servidor HTTP que la entrega.
pub mod config;
pub mod error;
pub mod excel;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod reporte;
pub mod server;
pub mod source;

pub use error::ReportError;
pub use reporte::generar_excel;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
