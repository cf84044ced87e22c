use crate::models::{Parada, ResumenFinanciero};

/// Suma ingresos y costos de todas las paradas.
///
/// La utilidad total se deriva como ingreso - costo; no es la suma de las
/// utilidades por parada, que vienen de otro campo del viaje.
pub fn calcular_resumen_financiero(paradas: &[Parada]) -> ResumenFinanciero {
    let ingreso_total: f64 = paradas
        .iter()
        .map(|p| p.ingresos.as_ref().map_or(0.0, |i| i.total))
        .sum();
    let costo_total: f64 = paradas
        .iter()
        .map(|p| p.costos.as_ref().map_or(0.0, |c| c.total))
        .sum();
    let utilidad_total = ingreso_total - costo_total;

    let margen = if ingreso_total > 0.0 {
        utilidad_total / ingreso_total * 100.0
    } else {
        0.0
    };

    ResumenFinanciero {
        ingreso_total,
        costo_total,
        utilidad_total,
        margen_promedio: redondear_un_decimal(margen),
    }
}

fn redondear_un_decimal(valor: f64) -> f64 {
    let r = (valor * 10.0).round() / 10.0;
    // -0.04 redondea a -0.0; se normaliza para no mostrar "-0.0"
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostosParada, IngresosParada};

    fn parada(ingreso: f64, costo: f64, utilidad: f64) -> Parada {
        Parada {
            secuencia: 1,
            folio: "F".to_string(),
            hora_estimada: "--:--".to_string(),
            cliente: String::new(),
            direccion: String::new(),
            municipio: None,
            estado: None,
            coordenadas: None,
            contacto_nombre: None,
            contacto_telefono: None,
            ventana_recepcion: None,
            tipo_servicio: String::new(),
            distancia_km: 0.0,
            nota_acceso: None,
            documentos_url: None,
            regresa_base: false,
            cumple_ventana: true,
            costos: Some(CostosParada {
                sueldo: 0.0,
                combustible: 0.0,
                casetas: 0.0,
                otros: 0.0,
                total: costo,
            }),
            ingresos: Some(IngresosParada { flete: ingreso, recargos: 0.0, total: ingreso }),
            utilidad: Some(utilidad),
        }
    }

    #[test]
    fn suma_totales_y_margen() {
        let r = calcular_resumen_financiero(&[parada(1000.0, 600.0, 0.0), parada(2000.0, 900.0, 0.0)]);
        assert_eq!(r.ingreso_total, 3000.0);
        assert_eq!(r.costo_total, 1500.0);
        assert_eq!(r.utilidad_total, 1500.0);
        assert_eq!(r.margen_promedio, 50.0);
    }

    #[test]
    fn utilidad_total_ignora_utilidad_por_parada() {
        let r = calcular_resumen_financiero(&[parada(1000.0, 400.0, 9999.0)]);
        assert_eq!(r.utilidad_total, 600.0);
    }

    #[test]
    fn margen_cero_sin_ingresos() {
        let r = calcular_resumen_financiero(&[parada(0.0, 750.0, 0.0)]);
        assert_eq!(r.utilidad_total, -750.0);
        assert_eq!(r.margen_promedio, 0.0);
    }

    #[test]
    fn margen_redondea_a_un_decimal() {
        // 1/3 = 33.333... -> 33.3 ; 2/3 = 66.666... -> 66.7
        let r = calcular_resumen_financiero(&[parada(3.0, 2.0, 0.0)]);
        assert_eq!(r.margen_promedio, 33.3);
        let r = calcular_resumen_financiero(&[parada(3.0, 1.0, 0.0)]);
        assert_eq!(r.margen_promedio, 66.7);
    }

    #[test]
    fn perdida_minima_da_margen_cero_positivo() {
        let r = calcular_resumen_financiero(&[parada(10000.0, 10004.0, 0.0)]);
        assert_eq!(r.utilidad_total, -4.0);
        assert_eq!(r.margen_promedio, 0.0);
        assert!(r.margen_promedio.is_sign_positive());
    }

    #[test]
    fn sin_paradas_resumen_en_cero() {
        let r = calcular_resumen_financiero(&[]);
        assert_eq!(r.ingreso_total, 0.0);
        assert_eq!(r.margen_promedio, 0.0);
    }
}
