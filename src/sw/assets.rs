// ============================================================================
// SW ASSETS - Manifiesto del app shell y nombre versionado de la caché
// ============================================================================

use wasm_bindgen::JsValue;

/// Prefijo fijo del bucket de caché
pub const CACHE_PREFIX: &str = "reporte";

/// Versión del app shell. Subirla fuerza una nueva caché completa en el
/// próximo install; los buckets viejos no se tocan.
pub const CACHE_VERSION: u32 = 2;

/// Recursos que se precachean en el install. La instalación es todo-o-nada:
/// si una sola ruta falla, el service worker no pasa a installed. Las rutas
/// tienen que coincidir con lo desplegado, incluido el propio módulo wasm
/// y su glue JS para que el shell arranque sin red.
pub const ASSET_MANIFEST: [&str; 9] = [
    "/",
    "index.html",
    "reportes.html",
    "css/style.css",
    "manifest.json",
    "pkg/reportes_matriculas_pwa.js",
    "pkg/reportes_matriculas_pwa_bg.wasm",
    "images/icon-192x192.png",
    "images/icon-512x512.png",
];

/// Nombre del bucket activo, p.ej. "reporte-v2"
pub fn cache_name() -> String {
    format!("{}-v{}", CACHE_PREFIX, CACHE_VERSION)
}

/// El manifiesto como Array de JS para Cache.addAll
pub fn manifest_array() -> js_sys::Array {
    ASSET_MANIFEST.iter().map(|ruta| JsValue::from_str(ruta)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nombre_de_cache_lleva_prefijo_y_version() {
        assert_eq!(cache_name(), "reporte-v2");
        assert!(cache_name().starts_with(CACHE_PREFIX));
        assert!(cache_name().ends_with(&CACHE_VERSION.to_string()));
    }

    #[test]
    fn manifiesto_sin_duplicados() {
        let unicos: HashSet<&str> = ASSET_MANIFEST.iter().copied().collect();
        assert_eq!(unicos.len(), ASSET_MANIFEST.len());
    }

    #[test]
    fn manifiesto_sin_rutas_vacias_ni_espacios() {
        for ruta in ASSET_MANIFEST {
            assert!(!ruta.is_empty());
            assert!(!ruta.contains(char::is_whitespace), "ruta con espacios: {}", ruta);
        }
    }

    #[test]
    fn manifiesto_incluye_el_modulo_wasm_y_su_glue() {
        assert!(ASSET_MANIFEST.contains(&"pkg/reportes_matriculas_pwa.js"));
        assert!(ASSET_MANIFEST.contains(&"pkg/reportes_matriculas_pwa_bg.wasm"));
    }

    #[test]
    fn manifiesto_incluye_las_dos_paginas_y_la_raiz() {
        assert!(ASSET_MANIFEST.contains(&"/"));
        assert!(ASSET_MANIFEST.contains(&"index.html"));
        assert!(ASSET_MANIFEST.contains(&"reportes.html"));
    }

    // Las peticiones del propio worker no pasan por su listener de fetch,
    // así que el shim tiene que arrancar el wasm desde el bucket y la ruta
    // que consulta tiene que ser una de las precacheadas.
    #[test]
    fn el_shim_arranca_el_wasm_desde_el_bucket_precacheado() {
        let shim = include_str!("../../www/sw.js");
        assert!(
            shim.contains("caches"),
            "el shim debe consultar la caché antes de ir a la red"
        );

        let ruta_wasm = ASSET_MANIFEST
            .iter()
            .find(|ruta| ruta.ends_with(".wasm"))
            .expect("el manifiesto debe precachear el binario wasm");
        assert!(
            shim.contains(ruta_wasm),
            "el shim debe arrancar desde la misma ruta wasm que precachea el manifiesto"
        );
    }
}
