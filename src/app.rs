// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_attribute, get_element_by_id, set_inner_html};
use crate::views::{render_report_form, render_report_list};

/// Página que sirve este montaje. El mismo módulo wasm atiende las dos;
/// el HTML elige con el atributo data-view del elemento raíz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    ReportForm,
    ReportList,
}

/// Aplicación principal
pub struct App {
    page: Page,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let page = match get_attribute(&root, "data-view").as_deref() {
            Some("reportes") => Page::ReportList,
            _ => Page::ReportForm,
        };

        log::info!("🎬 [APP] Vista seleccionada: {:?}", page);

        Ok(Self {
            page,
            root: Some(root),
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let view = match self.page {
                Page::ReportForm => render_report_form()?,
                Page::ReportList => render_report_list()?,
            };
            append_child(root, &view)?;
        }
        Ok(())
    }
}
