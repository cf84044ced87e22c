use thiserror::Error;

/// Errores de los bordes del crate (configuración, vistas, HTTP).
/// La composición del plan en sí no falla.
#[derive(Debug, Error)]
pub enum FlotillaError {
    #[error("valor inválido para {clave}: {mensaje}")]
    Config { clave: String, mensaje: String },

    #[error("locale no soportado: {0}")]
    LocaleNoSoportado(String),

    #[error("el plan se compuso sin costos; la vista de administración los requiere")]
    SinResumenFinanciero,

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}
