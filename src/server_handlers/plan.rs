use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use futures_util::future::join_all;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::error::FlotillaError;
use crate::formato::ConfigRegional;
use crate::models::{ItinerarioVehiculo, PlanTrabajo};
use crate::plan_trabajo::componer_plan_trabajo;
use crate::vistas::{vista_administracion, vista_operador};

/// Estado compartido por los handlers.
pub struct EstadoApp {
    pub regional: ConfigRegional,
    pub semaforo: Arc<Semaphore>,
}

impl EstadoApp {
    pub fn new(regional: ConfigRegional, max_concurrencia: usize) -> Self {
        EstadoApp {
            regional,
            semaforo: Arc::new(Semaphore::new(std::cmp::max(1, max_concurrencia))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudPlan {
    pub fecha: NaiveDate,
    #[serde(default)]
    pub incluir_costos: bool,
    pub itinerario: ItinerarioVehiculo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudLote {
    pub fecha: NaiveDate,
    #[serde(default)]
    pub incluir_costos: bool,
    pub itinerarios: Vec<ItinerarioVehiculo>,
}

fn parse_body<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, FlotillaError> {
    Ok(serde_json::from_value::<T>(body)?)
}

fn bad_request(e: FlotillaError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)}))
}

fn generado_en() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M").to_string()
}

/// POST /plan-trabajo
pub async fn plan_trabajo_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let sol: SolicitudPlan = match parse_body(body.into_inner()) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    log::info!(
        "plan de trabajo {} para {} (costos: {})",
        sol.fecha,
        sol.itinerario.vehiculo.numero_economico,
        sol.incluir_costos
    );
    let plan = componer_plan_trabajo(&sol.itinerario, sol.fecha, sol.incluir_costos);
    HttpResponse::Ok().json(plan)
}

/// POST /plan-trabajo/operador
/// Siempre compone sin costos, sin importar `incluirCostos`.
pub async fn vista_operador_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let sol: SolicitudPlan = match parse_body(body.into_inner()) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    log::info!("vista operador {} para {}", sol.fecha, sol.itinerario.vehiculo.numero_economico);
    let plan = componer_plan_trabajo(&sol.itinerario, sol.fecha, false);
    HttpResponse::Ok().json(vista_operador(&plan, &estado.regional, &generado_en()))
}

/// POST /plan-trabajo/administracion
pub async fn vista_administracion_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let sol: SolicitudPlan = match parse_body(body.into_inner()) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    log::info!(
        "vista administración {} para {}",
        sol.fecha,
        sol.itinerario.vehiculo.numero_economico
    );
    let plan = componer_plan_trabajo(&sol.itinerario, sol.fecha, true);
    match vista_administracion(&plan, &estado.regional, &generado_en()) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::UnprocessableEntity().json(json!({"error": e.to_string()})),
    }
}

/// POST /plan-trabajo/lote
/// Compone varios vehículos en paralelo; la respuesta conserva el orden de entrada.
pub async fn plan_lote_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let sol: SolicitudLote = match parse_body(body.into_inner()) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    log::info!("lote de {} planes para {}", sol.itinerarios.len(), sol.fecha);

    let fecha = sol.fecha;
    let incluir_costos = sol.incluir_costos;
    let tareas = sol.itinerarios.into_iter().map(|itinerario| {
        let sem = estado.semaforo.clone();
        async move {
            let permit = match sem.acquire_owned().await {
                Ok(p) => p,
                Err(_) => return Err("failed to acquire semaphore".to_string()),
            };
            tokio::task::spawn_blocking(move || {
                let _permit = permit;
                componer_plan_trabajo(&itinerario, fecha, incluir_costos)
            })
            .await
            .map_err(|e| format!("task join error: {}", e))
        }
    });

    let resultados: Result<Vec<PlanTrabajo>, String> = join_all(tareas).await.into_iter().collect();
    match resultados {
        Ok(planes) => HttpResponse::Ok().json(json!({"planes": planes})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e})),
    }
}
