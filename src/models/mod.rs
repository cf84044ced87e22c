// Estructuras de datos principales
//
// `viaje` contiene lo que llega desde el almacén de documentos (solo lectura
// para el compositor); `plan` contiene lo que el compositor produce.

mod plan;
mod viaje;

pub use plan::{CostosParada, IngresosParada, Parada, PlanTrabajo, ResumenFinanciero};
pub use viaje::{
    Coordenadas, Costos, Documento, Ingresos, ItinerarioVehiculo, RutaCriticaResultado, Seguridad,
    Tiempos, Ubicacion, Vehiculo, VentanaRecepcion, Viaje, ViajeRef,
};
