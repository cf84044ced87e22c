use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Coordenadas, Vehiculo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostosParada {
    pub sueldo: f64,
    pub combustible: f64,
    pub casetas: f64,
    /// comidas + transporte + otros
    pub otros: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngresosParada {
    pub flete: f64,
    pub recargos: f64,
    pub total: f64,
}

/// Un viaje ya posicionado en el orden del día.
///
/// `costos`, `ingresos` y `utilidad` solo existen cuando el plan se compuso
/// con costos; en la vista del operador nunca se leen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parada {
    pub secuencia: usize,
    pub folio: String,
    pub hora_estimada: String,
    pub cliente: String,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Coordenadas>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto_telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventana_recepcion: Option<String>,
    pub tipo_servicio: String,
    pub distancia_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota_acceso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentos_url: Option<Vec<String>>,
    pub regresa_base: bool,
    pub cumple_ventana: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costos: Option<CostosParada>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingresos: Option<IngresosParada>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilidad: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenFinanciero {
    pub ingreso_total: f64,
    pub costo_total: f64,
    pub utilidad_total: f64,
    /// Porcentaje con un decimal (50.0 = 50 %).
    pub margen_promedio: f64,
}

/// Plan de trabajo de un vehículo para un día. Se crea en cada composición y
/// pertenece por completo a quien lo pidió.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTrabajo {
    pub fecha: NaiveDate,
    pub vehiculo: Vehiculo,
    pub operador_nombre: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub km_totales: f64,
    pub paradas: Vec<Parada>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumen: Option<ResumenFinanciero>,
}
