use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` en el documento se trata igual que la clave ausente.
fn nulo_como_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordenadas {
    pub lat: f64,
    pub lng: f64,
}

/// Ventana de recepción declarada por el cliente ("08:00", "14:00").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentanaRecepcion {
    pub inicio: Option<String>,
    pub fin: Option<String>,
}

/// Origen o destino de un viaje.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ubicacion {
    /// Nombre del cliente / sitio. También sirve de dirección cuando `direccion` viene vacía.
    #[serde(deserialize_with = "nulo_como_default")]
    pub nombre: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub direccion: String,
    pub municipio: Option<String>,
    pub estado: Option<String>,
    pub coordenadas: Option<Coordenadas>,
    pub contacto_nombre: Option<String>,
    pub contacto_telefono: Option<String>,
    pub ventana_recepcion: Option<VentanaRecepcion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tiempos {
    /// Solo se usa como criterio de orden cuando no hay ruta crítica.
    pub inicio: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    pub nombre: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seguridad {
    pub nota_acceso: Option<String>,
    #[serde(deserialize_with = "nulo_como_default")]
    pub documentos: Vec<Documento>,
}

/// Desglose de costos tal como se guarda en el viaje. Todos los campos son opcionales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Costos {
    pub sueldo: Option<f64>,
    pub combustible: Option<f64>,
    pub casetas: Option<f64>,
    pub comidas: Option<f64>,
    pub transporte: Option<f64>,
    pub otros: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingresos {
    pub flete: Option<f64>,
    pub recargos: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Viaje {
    /// Identidad del documento; es lo que referencia la ruta crítica.
    #[serde(deserialize_with = "nulo_como_default")]
    pub id: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub folio: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub origen: Ubicacion,
    #[serde(deserialize_with = "nulo_como_default")]
    pub destino: Ubicacion,
    #[serde(deserialize_with = "nulo_como_default")]
    pub tipo_servicio: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub distancia_km: f64,
    pub tiempos: Option<Tiempos>,
    pub seguridad: Option<Seguridad>,
    #[serde(deserialize_with = "nulo_como_default")]
    pub regresa_base: bool,
    pub costos: Option<Costos>,
    pub ingresos: Option<Ingresos>,
    pub utilidad: Option<f64>,
}

impl Viaje {
    pub fn inicio(&self) -> Option<DateTime<Utc>> {
        self.tiempos.as_ref().and_then(|t| t.inicio)
    }
}

/// Referencia a un viaje dentro de la secuencia de la ruta crítica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViajeRef {
    pub id: String,
    #[serde(default)]
    pub folio: Option<String>,
}

/// Resultado de la ruta crítica, calculado fuera de este crate.
///
/// `horas_llegada` y `cumple_ventana` son paralelos a `secuencia`; pueden venir
/// más cortos (o vacíos) y se consumen tal cual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RutaCriticaResultado {
    #[serde(deserialize_with = "nulo_como_default")]
    pub secuencia: Vec<ViajeRef>,
    #[serde(deserialize_with = "nulo_como_default")]
    pub horas_llegada: Vec<String>,
    #[serde(deserialize_with = "nulo_como_default")]
    pub cumple_ventana: Vec<bool>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    #[serde(deserialize_with = "nulo_como_default")]
    pub km_totales: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehiculo {
    #[serde(deserialize_with = "nulo_como_default")]
    pub numero_economico: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub marca: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub tipo_unidad: String,
}

/// Entrada del compositor: un vehículo con sus viajes del día.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItinerarioVehiculo {
    #[serde(deserialize_with = "nulo_como_default")]
    pub vehiculo: Vehiculo,
    #[serde(deserialize_with = "nulo_como_default")]
    pub operador_nombre: String,
    #[serde(deserialize_with = "nulo_como_default")]
    pub viajes: Vec<Viaje>,
    pub km_totales: Option<f64>,
    pub ruta_critica: Option<RutaCriticaResultado>,
}
