// ============================================================================
// SERVICE WORKER - Shell offline cache-first
// ============================================================================
// El mismo módulo wasm corre en la página y dentro del worker. El shim
// www/sw.js registra los listeners install/activate/fetch de forma síncrona
// (obligatorio en la primera evaluación del script) y delega en estos
// entry points una vez que el wasm terminó de inicializar.
// ============================================================================

pub mod assets;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Cache, CacheStorage, RegistrationOptions, Request, Response, ServiceWorkerGlobalScope,
    ServiceWorkerRegistration,
};

use crate::sw::assets::{cache_name, manifest_array, ASSET_MANIFEST};

/// Scope global del worker; falla fuera de un contexto de service worker
fn worker_scope() -> Result<ServiceWorkerGlobalScope, JsValue> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| JsValue::from_str("No es un contexto de Service Worker"))
}

/// Install: precachea el manifiesto completo en el bucket versionado.
/// Cache.addAll es todo-o-nada, así que un recurso inalcanzable aborta
/// la instalación entera (el shim pasa este future a event.waitUntil).
#[wasm_bindgen]
pub async fn sw_install() -> Result<(), JsValue> {
    log::info!("📦 [SW] Install: poblando {}", cache_name());

    let scope = worker_scope()?;
    let cache_storage: CacheStorage = scope.caches()?;

    let cache: Cache = JsFuture::from(cache_storage.open(&cache_name()))
        .await?
        .dyn_into()?;
    JsFuture::from(cache.add_all_with_str_sequence(&manifest_array())).await?;

    log::info!("✅ [SW] {} recursos precacheados", ASSET_MANIFEST.len());
    Ok(())
}

/// Activate: solo deja constancia. Los buckets de versiones anteriores se
/// quedan donde están; el reemplazo es por nombre de caché completo.
#[wasm_bindgen]
pub async fn sw_activate() -> Result<(), JsValue> {
    log::info!("✅ [SW] Activo con caché {}", cache_name());
    Ok(())
}

/// Fetch: estrategia cache-first. Lo cacheado se sirve tal cual se guardó,
/// sin revalidar; en miss se va a la red y la respuesta NO se escribe de
/// vuelta (la caché solo cambia en un install con versión nueva). Si la red
/// también falla, el rechazo se propaga al navegador sin página de fallback.
#[wasm_bindgen]
pub async fn sw_fetch(request: Request) -> Result<Response, JsValue> {
    let scope = worker_scope()?;
    let cache_storage: CacheStorage = scope.caches()?;

    let cached = JsFuture::from(cache_storage.match_with_request(&request)).await?;
    if let Ok(response) = cached.dyn_into::<Response>() {
        return Ok(response);
    }

    let fetched = JsFuture::from(scope.fetch_with_request(&request)).await?;
    fetched.dyn_into::<Response>()
}

/// Registro del service worker desde la página. Se registra como módulo ES
/// porque el shim importa el glue de wasm-bindgen.
pub async fn registrar_service_worker() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();

    if !js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker"))? {
        return Err(JsValue::from_str("El navegador no soporta Service Workers"));
    }

    let options = RegistrationOptions::new();
    options.set_type("module");

    let promise = navigator
        .service_worker()
        .register_with_options("sw.js", &options);
    let registration: ServiceWorkerRegistration = JsFuture::from(promise).await?.dyn_into()?;

    Ok(registration.scope())
}
