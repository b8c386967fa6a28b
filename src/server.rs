use std::sync::Arc;

use actix_web::http::header;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::models::SemanaVentana;
use crate::reporte::generar_excel;
use crate::source::{ArchivoJson, FuenteTurnos};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const NOMBRE_DESCARGA: &str = "programacion.xlsx";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Estado compartido por los workers: configuración y fuente de turnos.
/// La plantilla no se comparte; cada petición abre la suya.
pub struct AppState {
    pub config: AppConfig,
    pub fuente: Arc<dyn FuenteTurnos>,
}

#[derive(Debug, Deserialize)]
pub struct ExcelQuery {
    ini: Option<String>,
    fin: Option<String>,
}

fn parse_fecha_query(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// GET /
async fn index_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// GET /excel?ini=YYYY-MM-DD&fin=YYYY-MM-DD
/// Devuelve la planilla semanal como adjunto xlsx.
async fn excel_handler(state: web::Data<AppState>, query: web::Query<ExcelQuery>) -> HttpResponse {
    let q = query.into_inner();
    let no_vacio = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
    let (ini, fin) = match (no_vacio(q.ini), no_vacio(q.fin)) {
        (Some(i), Some(f)) => (i, f),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "Parámetros ini y fin requeridos (YYYY-MM-DD)"}));
        }
    };

    let (d_ini, d_fin) = match (parse_fecha_query(&ini), parse_fecha_query(&fin)) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "Formato de fecha inválido. Use YYYY-MM-DD"}));
        }
    };

    let ventana = match SemanaVentana::new(d_ini, d_fin) {
        Ok(v) => v,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({"error": "fin debe ser posterior a ini"}));
        }
    };

    let state = state.into_inner();
    let blocking_handle = tokio::task::spawn_blocking(move || {
        generar_excel(&state.config, &ventana, state.fuente.as_ref())
    });

    match blocking_handle.await {
        Ok(Ok(bytes)) => HttpResponse::Ok()
            .content_type(XLSX_MIME)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", NOMBRE_DESCARGA),
            ))
            .body(bytes),
        Ok(Err(e)) => {
            warn!("fallo al generar excel {} - {}: {}", d_ini, d_fin, e);
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("task join error: {}", e)})),
    }
}

/// Rutas de la aplicación (también usado por los tests).
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/excel", web::get().to(excel_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let fuente: Arc<dyn FuenteTurnos> = Arc::new(ArchivoJson::new(config.turnos.clone()));
    let state = web::Data::new(AppState { config, fuente });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configurar)
    })
    .bind(bind)?
    .run()
    .await
}
