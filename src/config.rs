use std::env;

use crate::error::FlotillaError;
use crate::formato::ConfigRegional;

pub const BIND_DEFAULT: &str = "127.0.0.1:8080";

/// Configuración del servidor. Se lee de variables de entorno, con `.env`
/// opcional (FLOTILLA_BIND, FLOTILLA_LOCALE, FLOTILLA_MAX_CONCURRENCIA).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub regional: ConfigRegional,
    pub max_concurrencia: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, FlotillaError> {
        // load .env if present
        let _ = dotenv::dotenv();
        Self::from_lookup(|clave| env::var(clave).ok())
    }

    /// Igual que `from_env` pero con una fuente de valores inyectada (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FlotillaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_vacio = |clave: &str| lookup(clave).filter(|v| !v.trim().is_empty());

        let bind = no_vacio("FLOTILLA_BIND").unwrap_or_else(|| BIND_DEFAULT.to_string());

        let regional = match no_vacio("FLOTILLA_LOCALE") {
            Some(locale) => ConfigRegional::desde_locale(&locale)?,
            None => ConfigRegional::es_mx(),
        };

        let max_concurrencia = match no_vacio("FLOTILLA_MAX_CONCURRENCIA") {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(FlotillaError::Config {
                        clave: "FLOTILLA_MAX_CONCURRENCIA".to_string(),
                        mensaje: format!("se esperaba un entero positivo, llegó '{}'", v),
                    });
                }
            },
            None => std::cmp::max(1, num_cpus::get()),
        };

        Ok(Config { bind, regional, max_concurrencia })
    }
}
