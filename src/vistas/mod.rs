// Proyecciones de solo lectura sobre un `PlanTrabajo` para los dos formatos
// impresos. Cada vista lee únicamente lo que su formato muestra: la del
// operador no toca costos, ingresos, utilidad ni resumen aunque vengan.

mod administracion;
mod operador;

pub use administracion::{vista_administracion, FilaFinanciera, ResumenFormateado, VistaAdministracion};
pub use operador::{vista_operador, FilaOperador, VistaOperador};

use serde::Serialize;

use crate::formato::{formatear_fecha_larga, ConfigRegional};
use crate::models::PlanTrabajo;

/// Encabezado común a ambos formatos.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encabezado {
    pub fecha: String,
    pub numero_economico: String,
    pub marca: String,
    pub tipo_unidad: String,
    pub operador: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub km_totales: f64,
    pub total_paradas: usize,
    pub generado_en: String,
}

fn encabezado(plan: &PlanTrabajo, cfg: &ConfigRegional, generado_en: &str) -> Encabezado {
    Encabezado {
        fecha: formatear_fecha_larga(plan.fecha, cfg),
        numero_economico: plan.vehiculo.numero_economico.clone(),
        marca: plan.vehiculo.marca.clone(),
        tipo_unidad: plan.vehiculo.tipo_unidad.clone(),
        operador: plan.operador_nombre.clone(),
        hora_inicio: plan.hora_inicio.clone(),
        hora_fin: plan.hora_fin.clone(),
        km_totales: plan.km_totales,
        total_paradas: plan.paradas.len(),
        generado_en: generado_en.to_string(),
    }
}
