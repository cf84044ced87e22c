use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{RutaCriticaResultado, Viaje};

/// Decide el orden definitivo de visita.
///
/// Con ruta crítica se respeta exactamente su `secuencia`, resolviendo cada
/// referencia por `id` contra `viajes`; las referencias que no encuentran viaje
/// se descartan. Sin ruta crítica se ordena por `tiempos.inicio` ascendente,
/// tratando el inicio ausente como la época (queda primero) con orden estable.
pub fn resolver_orden<'a>(
    viajes: &'a [Viaje],
    ruta_critica: Option<&RutaCriticaResultado>,
) -> Vec<&'a Viaje> {
    match ruta_critica {
        Some(rc) => orden_por_ruta_critica(viajes, rc),
        None => orden_por_inicio(viajes),
    }
}

fn orden_por_ruta_critica<'a>(viajes: &'a [Viaje], rc: &RutaCriticaResultado) -> Vec<&'a Viaje> {
    // Con ids repetidos gana el primero, igual que una búsqueda lineal.
    let mut por_id: HashMap<&str, &'a Viaje> = HashMap::with_capacity(viajes.len());
    for v in viajes {
        por_id.entry(v.id.as_str()).or_insert(v);
    }

    let mut ordenados = Vec::with_capacity(rc.secuencia.len());
    for referencia in &rc.secuencia {
        match por_id.get(referencia.id.as_str()) {
            Some(v) => ordenados.push(*v),
            None => log::warn!(
                "ruta crítica referencia el viaje '{}' que no está en la lista; se omite",
                referencia.id
            ),
        }
    }
    ordenados
}

fn orden_por_inicio(viajes: &[Viaje]) -> Vec<&Viaje> {
    let mut ordenados: Vec<&Viaje> = viajes.iter().collect();
    // sort_by_key es estable
    ordenados.sort_by_key(|v| v.inicio().unwrap_or(DateTime::<Utc>::UNIX_EPOCH));
    ordenados
}
