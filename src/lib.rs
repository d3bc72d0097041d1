// ============================================================================
// REPORTES DE MATRÍCULAS - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI, clasifican los resultados del API
// - Services: SOLO comunicación HTTP
// - Models: Estructuras compartidas con backend
// - SW: shell offline cache-first, mismo binario wasm que la página
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod viewmodels;
mod views;
pub mod sw;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    // El mismo módulo corre en la página y dentro del service worker.
    // En el worker no hay window ni DOM que montar; el shim sw.js llama
    // directamente a los entry points sw_install/sw_activate/sw_fetch.
    if web_sys::window().is_none() {
        log::info!("🚀 Reportes de Matrículas - módulo cargado en el service worker");
        return Ok(());
    }

    log::info!("🚀 Reportes de Matrículas - Rust Puro + MVVM");
    log::info!("🌐 [CONFIG] API: {} (entorno: {})", CONFIG.api_url(), CONFIG.environment);

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Registrar el service worker sin bloquear el arranque de la página
    spawn_local(async {
        match crate::sw::registrar_service_worker().await {
            Ok(scope) => log::info!("✅ [SW] Service Worker registrado: {}", scope),
            Err(e) => log::warn!("⚠️ [SW] Falló el registro del Service Worker: {:?}", e),
        }
    });

    Ok(())
}
