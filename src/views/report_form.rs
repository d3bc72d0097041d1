// ============================================================================
// REPORT FORM VIEW - Formulario de reporte de infracción
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};
use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{
    add_class, append_child, create_element, on_submit, set_attribute, set_class_name,
    set_text_content, ElementBuilder,
};
use crate::models::SubmissionOutcome;
use crate::viewmodels::ReportFormViewModel;

/// Renderizar la vista del formulario de reporte
pub fn render_report_form() -> Result<Element, JsValue> {
    log::info!("🎬 [FORM] render_report_form() llamado");

    // Estado local de la vista: un solo envío en vuelo a la vez
    let enviando = Rc::new(RefCell::new(false));

    let container = ElementBuilder::new("div")?
        .class("container")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Reportar Infracción de Tránsito")
        .build();
    append_child(&container, &title)?;

    // Formulario multipart: dos fotos + descripción
    let form = create_element("form")?;
    set_class_name(&form, "report-form");
    set_attribute(&form, "id", "reporteForm")?;

    let placa_group = create_file_group("placa_foto", "Foto de la Placa (Matrícula):")?;
    let infraccion_group = create_file_group("infraccion_foto", "Foto de la Infracción (Contexto):")?;
    let descripcion_group = create_descripcion_group()?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .id("submitButton")?
        .class("btn-submit")
        .text("Enviar Reporte")
        .build();

    append_child(&form, &placa_group)?;
    append_child(&form, &infraccion_group)?;
    append_child(&form, &descripcion_group)?;
    append_child(&form, &submit_btn)?;

    // Línea de estado (oculta hasta el primer envío)
    let status_message = ElementBuilder::new("p")?
        .id("statusMessage")?
        .class("status-message hidden")
        .build();

    // Event listener para submit
    {
        let form_el = form.clone();
        let submit_btn = submit_btn.clone();
        let status = status_message.clone();
        let enviando = enviando.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            // El botón deshabilitado ya evita el doble envío; el flag cubre
            // el hueco hasta que el atributo disabled se aplica
            if *enviando.borrow() {
                log::warn!("⚠️ [FORM] Envío ignorado: ya hay uno en vuelo");
                return;
            }

            let form_html: HtmlFormElement = match form_el.clone().dyn_into::<HtmlFormElement>() {
                Ok(f) => f,
                Err(_) => {
                    log::error!("❌ [FORM] El elemento del formulario no es un <form>");
                    return;
                }
            };

            // FormData encapsula los campos de texto y los archivos binarios
            let form_data = match FormData::new_with_form(&form_html) {
                Ok(fd) => fd,
                Err(err) => {
                    log::error!("❌ [FORM] No se pudo leer el formulario: {:?}", err);
                    return;
                }
            };

            *enviando.borrow_mut() = true;

            // Preparar la UI para el envío
            if let Some(boton) = submit_btn.dyn_ref::<HtmlButtonElement>() {
                boton.set_disabled(true);
            }
            set_text_content(&submit_btn, "Enviando...");
            set_class_name(&status, "status-message");
            set_text_content(&status, "Procesando imágenes y buscando en DB...");

            let submit_btn = submit_btn.clone();
            let status = status.clone();
            let form_html = form_html.clone();
            let enviando = enviando.clone();

            spawn_local(async move {
                let vm = ReportFormViewModel::new();
                let outcome = vm.enviar(form_data).await;

                aplicar_outcome(&status, &form_html, &outcome);

                // Pase lo que pase, el botón vuelve a quedar disponible
                if let Some(boton) = submit_btn.dyn_ref::<HtmlButtonElement>() {
                    boton.set_disabled(false);
                }
                set_text_content(&submit_btn, "Enviar Reporte");
                *enviando.borrow_mut() = false;
            });
        })?;
    }

    append_child(&container, &form)?;
    append_child(&container, &status_message)?;

    Ok(container)
}

/// Pinta el outcome en la línea de estado y limpia el formulario si procede
fn aplicar_outcome(status: &Element, form: &HtmlFormElement, outcome: &SubmissionOutcome) {
    set_class_name(status, "status-message");
    if let Err(e) = add_class(status, outcome.css_class()) {
        log::error!("❌ [FORM] No se pudo aplicar la clase de estado: {:?}", e);
    }
    set_text_content(status, &outcome.mensaje_usuario());

    if outcome.resets_form() {
        form.reset();
    }
}

/// Helper para crear form group con input de archivo
fn create_file_group(name: &str, label_text: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", name)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "file")?;
    set_attribute(&input, "id", name)?;
    set_attribute(&input, "name", name)?;
    set_attribute(&input, "accept", "image/*")?;
    set_attribute(&input, "required", "")?;
    set_class_name(&input, "form-input");

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}

/// Helper para crear el form group de la descripción
fn create_descripcion_group() -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", "descripcion")?
        .text("Descripción del Problema:")
        .build();

    let textarea = create_element("textarea")?;
    set_attribute(&textarea, "id", "descripcion")?;
    set_attribute(&textarea, "name", "descripcion")?;
    set_attribute(&textarea, "rows", "4")?;
    set_attribute(&textarea, "placeholder", "Describe la infracción observada...")?;
    set_attribute(&textarea, "required", "")?;
    set_class_name(&textarea, "form-input");

    append_child(&group, &label)?;
    append_child(&group, &textarea)?;

    Ok(group)
}
