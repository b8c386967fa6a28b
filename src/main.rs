// --- Programación y control de horas - servidor ---

use planilla_turnos::config::AppConfig;
use planilla_turnos::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::from_env();
    log::info!("Iniciando servidor en http://{}", config.bind);
    run_server(config).await
}
