// Formato regional para las vistas impresas.
//
// Funciones puras: reciben el valor y un `ConfigRegional`; no dependen del
// locale del sistema, así que las pruebas no necesitan preparar el entorno.

use chrono::{Datelike, NaiveDate};

use crate::error::FlotillaError;

const DIAS_ES: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

const MESES_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRegional {
    pub locale: &'static str,
    /// Indexado desde lunes.
    pub dias: [&'static str; 7],
    pub meses: [&'static str; 12],
    pub simbolo_moneda: &'static str,
    pub separador_miles: char,
}

impl ConfigRegional {
    pub fn es_mx() -> Self {
        ConfigRegional {
            locale: "es-MX",
            dias: DIAS_ES,
            meses: MESES_ES,
            simbolo_moneda: "$",
            separador_miles: ',',
        }
    }

    pub fn desde_locale(locale: &str) -> Result<Self, FlotillaError> {
        match locale.trim() {
            "es-MX" | "es_MX" => Ok(Self::es_mx()),
            otro => Err(FlotillaError::LocaleNoSoportado(otro.to_string())),
        }
    }
}

impl Default for ConfigRegional {
    fn default() -> Self {
        Self::es_mx()
    }
}

/// "viernes, 16 de octubre de 2026"
pub fn formatear_fecha_larga(fecha: NaiveDate, cfg: &ConfigRegional) -> String {
    let dia = cfg.dias[fecha.weekday().num_days_from_monday() as usize];
    let mes = cfg.meses[fecha.month0() as usize];
    format!("{}, {} de {} de {}", dia, fecha.day(), mes, fecha.year())
}

/// Moneda sin decimales: 1234.5 -> "$1,235", -80 -> "-$80".
pub fn formatear_moneda(valor: f64, cfg: &ConfigRegional) -> String {
    let redondeado = valor.round();
    // -0.4 redondea a -0 y se muestra como "$0"
    let negativo = redondeado < 0.0;
    let entero = redondeado.abs() as u64;
    let cifras = agrupar_miles(entero, cfg.separador_miles);
    if negativo {
        format!("-{}{}", cfg.simbolo_moneda, cifras)
    } else {
        format!("{}{}", cfg.simbolo_moneda, cifras)
    }
}

/// Porcentaje con un decimal: 50.0 -> "50.0%".
pub fn formatear_porcentaje(valor: f64) -> String {
    let r = (valor * 10.0).round() / 10.0;
    // sin esto -0.04 se imprime "-0.0%"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{:.1}%", r)
}

fn agrupar_miles(n: u64, separador: char) -> String {
    let digitos = n.to_string();
    let mut out = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            out.push(separador);
        }
        out.push(c);
    }
    out
}
