// ============================================================================
// REPORT LIST VIEW - Listado de reportes registrados
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{add_class, append_child, set_inner_html, set_text_content, ElementBuilder};
use crate::models::report::{es_url_segura, formatear_fecha};
use crate::models::{ListingOutcome, Reporte};
use crate::viewmodels::ReportListViewModel;

/// Renderizar la vista del listado; la carga arranca sola al montar
pub fn render_report_list() -> Result<Element, JsValue> {
    log::info!("🎬 [LISTA] render_report_list() llamado");

    let container = ElementBuilder::new("div")?
        .class("container")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Listado de Reportes Registrados")
        .build();

    let loading = ElementBuilder::new("p")?
        .id("loading-message")?
        .class("loading-message")
        .text("Cargando datos...")
        .build();

    let list = ElementBuilder::new("div")?
        .id("report-list")?
        .class("report-list")
        .build();

    append_child(&container, &title)?;
    append_child(&container, &loading)?;
    append_child(&container, &list)?;

    // Una sola carga por montaje de la página
    {
        let loading = loading.clone();
        let list = list.clone();

        spawn_local(async move {
            let vm = ReportListViewModel::new();
            let outcome = vm.cargar().await;

            if let Err(e) = aplicar_outcome(&loading, &list, outcome) {
                log::error!("❌ [LISTA] Error pintando el listado: {:?}", e);
            }
        });
    }

    Ok(container)
}

/// Pinta el outcome de la carga: tarjetas, placeholder o mensaje de error
fn aplicar_outcome(
    loading: &Element,
    list: &Element,
    outcome: ListingOutcome,
) -> Result<(), JsValue> {
    match outcome {
        ListingOutcome::Loaded(reportes) => {
            add_class(loading, "hidden")?;

            if reportes.is_empty() {
                let vacio = ElementBuilder::new("p")?
                    .class("empty-message")
                    .text("No hay reportes registrados aún.")
                    .build();
                append_child(list, &vacio)?;
                return Ok(());
            }

            // Orden del servidor, una tarjeta por reporte
            for reporte in &reportes {
                let card = render_report_card(reporte)?;
                append_child(list, &card)?;
            }
        }
        ListingOutcome::Failed { mensaje } => {
            add_class(loading, "hidden")?;
            let error = ElementBuilder::new("p")?
                .class("error")
                .text(&mensaje)
                .build();
            append_child(list, &error)?;
        }
        ListingOutcome::ConnectionError { mensaje } => {
            // La línea de carga se queda visible con el aviso y la lista se vacía
            set_text_content(loading, &mensaje);
            set_inner_html(list, "");
        }
    }
    Ok(())
}

/// Tarjeta de un reporte. Todo el texto del servidor entra como text content,
/// nunca como HTML.
fn render_report_card(reporte: &Reporte) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("report-card")
        .build();

    let titulo = ElementBuilder::new("h3")?
        .text(&format!("Placa Detectada: {}", reporte.placa_detectada))
        .build();
    append_child(&card, &titulo)?;

    append_child(&card, &render_campo("Propietario:", reporte.nombre_propietario())?)?;
    append_child(&card, &render_campo("Fecha:", &formatear_fecha(&reporte.fecha_reporte))?)?;
    append_child(&card, &render_campo("Descripción:", &reporte.descripcion)?)?;

    // Enlaces a las fotos de evidencia
    let enlaces = ElementBuilder::new("p")?
        .class("image-links")
        .build();
    append_child(&enlaces, &crear_enlace_foto(&reporte.url_foto_placa, "Ver Placa")?)?;
    let separador = ElementBuilder::new("span")?
        .text(" | ")
        .build();
    append_child(&enlaces, &separador)?;
    append_child(&enlaces, &crear_enlace_foto(&reporte.url_foto_infraccion, "Ver Infracción")?)?;
    append_child(&card, &enlaces)?;

    let divisor = ElementBuilder::new("hr")?.build();
    append_child(&card, &divisor)?;

    Ok(card)
}

/// Campo etiqueta + valor de la tarjeta
fn render_campo(etiqueta: &str, valor: &str) -> Result<Element, JsValue> {
    let campo = ElementBuilder::new("p")?
        .class("report-field")
        .build();

    let rotulo = ElementBuilder::new("strong")?
        .text(etiqueta)
        .build();
    let texto = ElementBuilder::new("span")?
        .text(&format!(" {}", valor))
        .build();

    append_child(&campo, &rotulo)?;
    append_child(&campo, &texto)?;

    Ok(campo)
}

/// Enlace a una foto de evidencia. Si la URL no es http/https el enlace
/// se degrada a texto plano sin href.
fn crear_enlace_foto(url: &str, etiqueta: &str) -> Result<Element, JsValue> {
    if !es_url_segura(url) {
        log::warn!("⚠️ [LISTA] URL de foto descartada por esquema no http(s): {}", url);
        return Ok(ElementBuilder::new("span")?
            .class("enlace-invalido")
            .text(etiqueta)
            .build());
    }

    Ok(ElementBuilder::new("a")?
        .attr("href", url)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(etiqueta)
        .build())
}
