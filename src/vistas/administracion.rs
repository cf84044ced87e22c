use serde::Serialize;

use crate::error::FlotillaError;
use crate::formato::{formatear_moneda, formatear_porcentaje, ConfigRegional};
use crate::models::{Parada, PlanTrabajo};

use super::{encabezado, Encabezado};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenFormateado {
    pub ingresos: String,
    pub costos: String,
    pub utilidad: String,
    pub margen: String,
}

/// Desglose por parada: sueldo, combustible, casetas, otros, utilidad.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilaFinanciera {
    pub secuencia: usize,
    pub folio: String,
    pub cliente: String,
    pub hora_estimada: String,
    pub distancia_km: f64,
    pub sueldo: String,
    pub combustible: String,
    pub casetas: String,
    pub otros: String,
    pub utilidad: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VistaAdministracion {
    pub encabezado: Encabezado,
    pub resumen: ResumenFormateado,
    pub paradas: Vec<FilaFinanciera>,
}

/// Falla con `SinResumenFinanciero` si el plan se compuso sin costos.
pub fn vista_administracion(
    plan: &PlanTrabajo,
    cfg: &ConfigRegional,
    generado_en: &str,
) -> Result<VistaAdministracion, FlotillaError> {
    let resumen = plan.resumen.as_ref().ok_or(FlotillaError::SinResumenFinanciero)?;

    Ok(VistaAdministracion {
        encabezado: encabezado(plan, cfg, generado_en),
        resumen: ResumenFormateado {
            ingresos: formatear_moneda(resumen.ingreso_total, cfg),
            costos: formatear_moneda(resumen.costo_total, cfg),
            utilidad: formatear_moneda(resumen.utilidad_total, cfg),
            margen: formatear_porcentaje(resumen.margen_promedio),
        },
        paradas: plan.paradas.iter().map(|p| fila(p, cfg)).collect(),
    })
}

fn fila(p: &Parada, cfg: &ConfigRegional) -> FilaFinanciera {
    let m = |v: Option<f64>| formatear_moneda(v.unwrap_or(0.0), cfg);
    let costos = p.costos.as_ref();
    FilaFinanciera {
        secuencia: p.secuencia,
        folio: p.folio.clone(),
        cliente: p.cliente.clone(),
        hora_estimada: p.hora_estimada.clone(),
        distancia_km: p.distancia_km,
        sueldo: m(costos.map(|c| c.sueldo)),
        combustible: m(costos.map(|c| c.combustible)),
        casetas: m(costos.map(|c| c.casetas)),
        otros: m(costos.map(|c| c.otros)),
        utilidad: m(p.utilidad),
    }
}
