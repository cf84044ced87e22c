// --- Planes de trabajo de flotilla - Archivo principal ---

use flotilla::config::Config;
use flotilla::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("configuración inválida: {}", e);
            std::process::exit(2);
        }
    };

    run_server(config).await
}
