use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /help
pub async fn help_handler() -> impl Responder {
    let example = json!({
        "fecha": "2026-10-16",
        "incluirCostos": true,
        "itinerario": {
            "vehiculo": { "numeroEconomico": "T-07", "marca": "Kenworth", "tipoUnidad": "Torton" },
            "operadorNombre": "Rosa Medina",
            "kmTotales": 0,
            "viajes": [{
                "id": "a1",
                "folio": "FOL-0001",
                "destino": {
                    "nombre": "Abarrotes La Luz",
                    "direccion": "Av. Juárez 120",
                    "municipio": "Zapopan",
                    "estado": "Jalisco",
                    "ventanaRecepcion": { "inicio": "08:00", "fin": "14:00" }
                },
                "tipoServicio": "entrega",
                "distanciaKm": 42.5,
                "tiempos": { "inicio": "2026-10-16T13:00:00Z" },
                "regresaBase": false,
                "costos": { "sueldo": 450, "combustible": 1200, "casetas": 236, "total": 1886 },
                "ingresos": { "flete": 3000, "total": 3000 },
                "utilidad": 1114
            }],
            "rutaCritica": {
                "secuencia": [{ "id": "a1" }],
                "horasLlegada": ["09:15"],
                "cumpleVentana": [true],
                "horaInicio": "07:00",
                "horaFin": "11:30",
                "kmTotales": 85.0
            }
        }
    });

    let help = json!({
        "description": "Compositor de planes de trabajo por vehículo. La ruta crítica es opcional; sin ella las paradas se ordenan por tiempos.inicio.",
        "endpoints": {
            "POST /plan-trabajo": "PlanTrabajo completo (con o sin costos según incluirCostos)",
            "POST /plan-trabajo/operador": "vista del operador, nunca incluye costos",
            "POST /plan-trabajo/administracion": "vista de administración con resumen financiero",
            "POST /plan-trabajo/lote": "varios itinerarios: { fecha, incluirCostos, itinerarios: [...] }"
        },
        "post_example": example
    });

    HttpResponse::Ok().json(help)
}
