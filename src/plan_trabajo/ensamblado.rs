use chrono::NaiveDate;

use crate::models::{ItinerarioVehiculo, Parada, PlanTrabajo, ResumenFinanciero};

use super::paradas::HORA_DESCONOCIDA;

/// Hora de salida cuando la ruta crítica no trae una.
pub const HORA_INICIO_DEFAULT: &str = "06:00";

/// Empaqueta metadatos del vehículo, horarios, kilometraje, paradas y resumen.
pub fn ensamblar_plan(
    itinerario: &ItinerarioVehiculo,
    fecha: NaiveDate,
    paradas: Vec<Parada>,
    resumen: Option<ResumenFinanciero>,
) -> PlanTrabajo {
    let rc = itinerario.ruta_critica.as_ref();

    let hora_inicio = rc
        .and_then(|r| hora_no_vacia(&r.hora_inicio))
        .unwrap_or_else(|| HORA_INICIO_DEFAULT.to_string());
    let hora_fin = rc
        .and_then(|r| hora_no_vacia(&r.hora_fin))
        .unwrap_or_else(|| HORA_DESCONOCIDA.to_string());

    PlanTrabajo {
        fecha,
        vehiculo: itinerario.vehiculo.clone(),
        operador_nombre: itinerario.operador_nombre.clone(),
        hora_inicio,
        hora_fin,
        km_totales: km_totales(itinerario),
        paradas,
        resumen,
    }
}

fn hora_no_vacia(hora: &Option<String>) -> Option<String> {
    hora.as_ref().filter(|h| !h.trim().is_empty()).cloned()
}

/// El total del vehículo manda si viene y no es cero; luego el de la ruta crítica.
fn km_totales(itinerario: &ItinerarioVehiculo) -> f64 {
    itinerario
        .km_totales
        .filter(|km| *km != 0.0 && !km.is_nan())
        .or_else(|| itinerario.ruta_critica.as_ref().map(|r| r.km_totales))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RutaCriticaResultado, Vehiculo};

    fn fecha() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn itinerario(km: Option<f64>, rc: Option<RutaCriticaResultado>) -> ItinerarioVehiculo {
        ItinerarioVehiculo {
            vehiculo: Vehiculo {
                numero_economico: "T-07".to_string(),
                marca: "Kenworth".to_string(),
                tipo_unidad: "Torton".to_string(),
            },
            operador_nombre: "Rosa Medina".to_string(),
            viajes: Vec::new(),
            km_totales: km,
            ruta_critica: rc,
        }
    }

    #[test]
    fn defaults_sin_ruta_critica() {
        let plan = ensamblar_plan(&itinerario(None, None), fecha(), Vec::new(), None);
        assert_eq!(plan.hora_inicio, "06:00");
        assert_eq!(plan.hora_fin, "--:--");
        assert_eq!(plan.km_totales, 0.0);
        assert_eq!(plan.vehiculo.numero_economico, "T-07");
        assert_eq!(plan.operador_nombre, "Rosa Medina");
        assert!(plan.resumen.is_none());
    }

    #[test]
    fn horarios_y_km_desde_ruta_critica() {
        let rc = RutaCriticaResultado {
            hora_inicio: Some("05:30".to_string()),
            hora_fin: Some("17:45".to_string()),
            km_totales: 312.0,
            ..Default::default()
        };
        let plan = ensamblar_plan(&itinerario(Some(0.0), Some(rc)), fecha(), Vec::new(), None);
        assert_eq!(plan.hora_inicio, "05:30");
        assert_eq!(plan.hora_fin, "17:45");
        assert_eq!(plan.km_totales, 312.0);
    }

    #[test]
    fn horas_vacias_usan_defaults() {
        let rc = RutaCriticaResultado {
            hora_inicio: Some(String::new()),
            hora_fin: Some(" ".to_string()),
            ..Default::default()
        };
        let plan = ensamblar_plan(&itinerario(None, Some(rc)), fecha(), Vec::new(), None);
        assert_eq!(plan.hora_inicio, "06:00");
        assert_eq!(plan.hora_fin, "--:--");
    }

    #[test]
    fn km_del_vehiculo_tiene_prioridad() {
        let rc = RutaCriticaResultado { km_totales: 312.0, ..Default::default() };
        let plan = ensamblar_plan(&itinerario(Some(280.5), Some(rc)), fecha(), Vec::new(), None);
        assert_eq!(plan.km_totales, 280.5);
    }
}
