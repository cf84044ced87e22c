use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::config::Config;
use crate::server_handlers::{
    help_handler, plan_lote_handler, plan_trabajo_handler, vista_administracion_handler,
    vista_operador_handler, EstadoApp,
};

/// Registra las rutas del API. Separado de `run_server` para poder montarlo en
/// `actix_web::test::init_service`.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/plan-trabajo", web::post().to(plan_trabajo_handler))
        .route("/plan-trabajo/operador", web::post().to(vista_operador_handler))
        .route("/plan-trabajo/administracion", web::post().to(vista_administracion_handler))
        .route("/plan-trabajo/lote", web::post().to(plan_lote_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let estado = web::Data::new(EstadoApp::new(config.regional.clone(), config.max_concurrencia));
    log::info!(
        "servidor en http://{} (locale {}, concurrencia {})",
        config.bind,
        config.regional.locale,
        config.max_concurrencia
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(estado.clone())
            .configure(configurar_rutas)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
