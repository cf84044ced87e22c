use serde::Serialize;

use crate::formato::ConfigRegional;
use crate::models::{Parada, PlanTrabajo};

use super::{encabezado, Encabezado};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilaOperador {
    pub secuencia: usize,
    pub folio: String,
    pub hora_estimada: String,
    pub cliente: String,
    pub direccion: String,
    /// "Zapopan, Jalisco"; vacío si no hay ninguno de los dos.
    pub ubicacion: String,
    pub contacto: Option<String>,
    pub ventana_recepcion: Option<String>,
    pub tipo_servicio: String,
    pub distancia_km: f64,
    pub nota_acceso: Option<String>,
    pub documentos_url: Vec<String>,
    pub regresa_base: bool,
    pub fuera_de_ventana: bool,
    /// Enlace de navegación cuando hay coordenadas.
    pub mapa_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VistaOperador {
    pub encabezado: Encabezado,
    pub paradas: Vec<FilaOperador>,
}

pub fn vista_operador(plan: &PlanTrabajo, cfg: &ConfigRegional, generado_en: &str) -> VistaOperador {
    VistaOperador {
        encabezado: encabezado(plan, cfg, generado_en),
        paradas: plan.paradas.iter().map(fila).collect(),
    }
}

fn fila(p: &Parada) -> FilaOperador {
    let ubicacion = [p.municipio.as_deref(), p.estado.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let contacto = match (&p.contacto_nombre, &p.contacto_telefono) {
        (Some(n), Some(t)) => Some(format!("{} ({})", n, t)),
        (Some(n), None) => Some(n.clone()),
        (None, Some(t)) => Some(t.clone()),
        (None, None) => None,
    };

    FilaOperador {
        secuencia: p.secuencia,
        folio: p.folio.clone(),
        hora_estimada: p.hora_estimada.clone(),
        cliente: p.cliente.clone(),
        direccion: p.direccion.clone(),
        ubicacion,
        contacto,
        ventana_recepcion: p.ventana_recepcion.clone(),
        tipo_servicio: p.tipo_servicio.clone(),
        distancia_km: p.distancia_km,
        nota_acceso: p.nota_acceso.clone(),
        documentos_url: p.documentos_url.clone().unwrap_or_default(),
        regresa_base: p.regresa_base,
        fuera_de_ventana: !p.cumple_ventana,
        mapa_url: p
            .coordenadas
            .as_ref()
            .map(|c| format!("https://www.google.com/maps?q={},{}", c.lat, c.lng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Coordenadas, Costos, ItinerarioVehiculo, Ubicacion, Vehiculo, Viaje,
    };
    use crate::plan_trabajo::componer_plan_trabajo;
    use chrono::NaiveDate;

    fn itinerario() -> ItinerarioVehiculo {
        ItinerarioVehiculo {
            vehiculo: Vehiculo {
                numero_economico: "C-12".to_string(),
                marca: "Isuzu".to_string(),
                tipo_unidad: "Rabón".to_string(),
            },
            operador_nombre: "Luis Ortega".to_string(),
            viajes: vec![Viaje {
                id: "v1".to_string(),
                folio: "FOL-9".to_string(),
                destino: Ubicacion {
                    nombre: "Bodega Norte".to_string(),
                    municipio: Some("Apodaca".to_string()),
                    estado: Some("Nuevo León".to_string()),
                    coordenadas: Some(Coordenadas { lat: 25.78, lng: -100.19 }),
                    contacto_nombre: Some("Marta".to_string()),
                    contacto_telefono: Some("8112345678".to_string()),
                    ..Default::default()
                },
                costos: Some(Costos { total: Some(900.0), ..Default::default() }),
                ..Default::default()
            }],
            km_totales: Some(120.0),
            ruta_critica: None,
        }
    }

    #[test]
    fn misma_vista_con_o_sin_costos() {
        let fecha = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let cfg = ConfigRegional::es_mx();
        let sin = vista_operador(&componer_plan_trabajo(&itinerario(), fecha, false), &cfg, "x");
        let con = vista_operador(&componer_plan_trabajo(&itinerario(), fecha, true), &cfg, "x");
        assert_eq!(sin, con);
        let json = serde_json::to_string(&con).unwrap();
        assert!(!json.contains("costos"));
        assert!(!json.contains("utilidad"));
    }

    #[test]
    fn fila_compone_ubicacion_contacto_y_mapa() {
        let fecha = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let v = vista_operador(
            &componer_plan_trabajo(&itinerario(), fecha, false),
            &ConfigRegional::es_mx(),
            "16/10/2026 07:00",
        );
        assert_eq!(v.encabezado.fecha, "viernes, 16 de octubre de 2026");
        assert_eq!(v.encabezado.total_paradas, 1);
        let f = &v.paradas[0];
        assert_eq!(f.direccion, "Bodega Norte");
        assert_eq!(f.ubicacion, "Apodaca, Nuevo León");
        assert_eq!(f.contacto.as_deref(), Some("Marta (8112345678)"));
        assert_eq!(f.mapa_url.as_deref(), Some("https://www.google.com/maps?q=25.78,-100.19"));
        assert!(!f.fuera_de_ventana);
        assert!(f.documentos_url.is_empty());
    }
}
