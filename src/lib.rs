// Biblioteca raíz del crate `flotilla`.
// El núcleo es `plan_trabajo` (compositor puro); alrededor están los modelos,
// el formato regional, las vistas para impresión y el servidor HTTP.
pub mod config;
pub mod error;
pub mod formato;
pub mod models;
pub mod plan_trabajo;
pub mod server;
pub mod server_handlers;
pub mod vistas;

pub use error::FlotillaError;
pub use plan_trabajo::componer_plan_trabajo;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
