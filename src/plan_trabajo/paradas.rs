use crate::models::{CostosParada, IngresosParada, Parada, RutaCriticaResultado, Viaje};

/// Hora que se muestra cuando no hay estimación de llegada.
pub const HORA_DESCONOCIDA: &str = "--:--";

/// Convierte los viajes ya ordenados en paradas, conservando el orden.
///
/// La hora estimada y el cumplimiento de ventana se toman de la ruta crítica
/// por la posición de la parada; si no hay dato (o la hora viene vacía) se
/// usan `"--:--"` y `true`.
pub fn enriquecer_paradas(
    ordenados: &[&Viaje],
    ruta_critica: Option<&RutaCriticaResultado>,
    incluir_costos: bool,
) -> Vec<Parada> {
    ordenados
        .iter()
        .enumerate()
        .map(|(idx, viaje)| enriquecer_parada(viaje, idx, ruta_critica, incluir_costos))
        .collect()
}

fn enriquecer_parada(
    viaje: &Viaje,
    idx: usize,
    ruta_critica: Option<&RutaCriticaResultado>,
    incluir_costos: bool,
) -> Parada {
    let destino = &viaje.destino;

    let hora_estimada = ruta_critica
        .and_then(|rc| rc.horas_llegada.get(idx))
        .filter(|h| !h.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| HORA_DESCONOCIDA.to_string());
    let cumple_ventana = ruta_critica
        .and_then(|rc| rc.cumple_ventana.get(idx))
        .copied()
        .unwrap_or(true);

    let (costos, ingresos, utilidad) = if incluir_costos {
        (
            Some(costos_parada(viaje)),
            Some(ingresos_parada(viaje)),
            Some(viaje.utilidad.unwrap_or(0.0)),
        )
    } else {
        (None, None, None)
    };

    Parada {
        secuencia: idx + 1,
        folio: viaje.folio.clone(),
        hora_estimada,
        cliente: destino.nombre.clone(),
        direccion: if destino.direccion.is_empty() {
            destino.nombre.clone()
        } else {
            destino.direccion.clone()
        },
        municipio: destino.municipio.clone(),
        estado: destino.estado.clone(),
        coordenadas: destino.coordenadas.clone(),
        contacto_nombre: destino.contacto_nombre.clone(),
        contacto_telefono: destino.contacto_telefono.clone(),
        ventana_recepcion: ventana_texto(viaje),
        tipo_servicio: viaje.tipo_servicio.clone(),
        distancia_km: viaje.distancia_km,
        nota_acceso: viaje.seguridad.as_ref().and_then(|s| s.nota_acceso.clone()),
        documentos_url: documentos_url(viaje),
        regresa_base: viaje.regresa_base,
        cumple_ventana,
        costos,
        ingresos,
        utilidad,
    }
}

/// "08:00 - 14:00" solo si el destino trae ambos extremos.
fn ventana_texto(viaje: &Viaje) -> Option<String> {
    let ventana = viaje.destino.ventana_recepcion.as_ref()?;
    match (&ventana.inicio, &ventana.fin) {
        (Some(inicio), Some(fin)) => Some(format!("{} - {}", inicio, fin)),
        _ => None,
    }
}

fn documentos_url(viaje: &Viaje) -> Option<Vec<String>> {
    let urls: Vec<String> = viaje
        .seguridad
        .iter()
        .flat_map(|s| s.documentos.iter())
        .filter_map(|d| d.url.as_deref())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();
    if urls.is_empty() { None } else { Some(urls) }
}

fn costos_parada(viaje: &Viaje) -> CostosParada {
    let c = viaje.costos.clone().unwrap_or_default();
    let cero = |v: Option<f64>| v.unwrap_or(0.0);
    CostosParada {
        sueldo: cero(c.sueldo),
        combustible: cero(c.combustible),
        casetas: cero(c.casetas),
        otros: cero(c.comidas) + cero(c.transporte) + cero(c.otros),
        total: cero(c.total),
    }
}

fn ingresos_parada(viaje: &Viaje) -> IngresosParada {
    let i = viaje.ingresos.clone().unwrap_or_default();
    IngresosParada {
        flete: i.flete.unwrap_or(0.0),
        recargos: i.recargos.unwrap_or(0.0),
        total: i.total.unwrap_or(0.0),
    }
}
