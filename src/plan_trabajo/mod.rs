// Compositor del plan de trabajo: orden -> paradas -> resumen -> plan.
//
// Todo el módulo es puro: no hace I/O, no lee reloj y nunca falla. Cada
// llamada es independiente y puede ejecutarse en paralelo con otras.

pub mod ensamblado;
pub mod finanzas;
pub mod orden;
pub mod paradas;

pub use ensamblado::{ensamblar_plan, HORA_INICIO_DEFAULT};
pub use finanzas::calcular_resumen_financiero;
pub use orden::resolver_orden;
pub use paradas::{enriquecer_paradas, HORA_DESCONOCIDA};

use chrono::NaiveDate;

use crate::models::{ItinerarioVehiculo, PlanTrabajo};

/// Compone el plan de trabajo de un vehículo para `fecha`.
///
/// Con `incluir_costos = false` se obtiene la proyección del operador (sin
/// campos financieros ni resumen); con `true`, la de administración.
pub fn componer_plan_trabajo(
    itinerario: &ItinerarioVehiculo,
    fecha: NaiveDate,
    incluir_costos: bool,
) -> PlanTrabajo {
    let rc = itinerario.ruta_critica.as_ref();
    log::debug!(
        "componiendo plan {} para {}: {} viajes, orden por {}",
        fecha,
        itinerario.vehiculo.numero_economico,
        itinerario.viajes.len(),
        if rc.is_some() { "ruta crítica" } else { "hora de inicio" }
    );

    let ordenados = resolver_orden(&itinerario.viajes, rc);
    let paradas = enriquecer_paradas(&ordenados, rc, incluir_costos);
    let resumen = incluir_costos.then(|| calcular_resumen_financiero(&paradas));

    ensamblar_plan(itinerario, fecha, paradas, resumen)
}
