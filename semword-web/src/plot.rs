//! Bridge to the page-global `Plotly` library.
use gloo::events::EventListener;
use semword_game::Figure;
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

thread_local! {
    static RESIZE_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("plot container #{0} not found")]
    MissingContainer(String),
    #[error("figure could not be converted: {0}")]
    Serialize(#[from] serde_wasm_bindgen::Error),
    #[error("Plotly rejected the figure: {0}")]
    Plotly(String),
}

/// Look up `Plotly.<path>` and return the function with its receiver.
fn plotly_method(path: &[&str]) -> Result<(JsValue, js_sys::Function), PlotError> {
    let unavailable = || PlotError::Plotly(format!("Plotly.{} is not available", path.join(".")));
    let mut owner: JsValue = js_sys::global().into();
    let mut value = js_sys::Reflect::get(&owner, &JsValue::from_str("Plotly"))
        .map_err(|_| unavailable())?;
    for key in path {
        owner = value;
        value = js_sys::Reflect::get(&owner, &JsValue::from_str(key)).map_err(|_| unavailable())?;
    }
    let function = value
        .dyn_into::<js_sys::Function>()
        .map_err(|_| unavailable())?;
    Ok((owner, function))
}

fn plotly_error(err: &JsValue) -> PlotError {
    PlotError::Plotly(crate::dom::js_error_message(err))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, PlotError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Draw `figure` into the element with id `container_id`, sized to it.
///
/// # Errors
/// Fails when the container is missing, the figure cannot be converted, or
/// Plotly throws.
pub fn draw(container_id: &str, figure: Figure) -> Result<(), PlotError> {
    let container = crate::dom::element_by_id(container_id)
        .ok_or_else(|| PlotError::MissingContainer(container_id.to_string()))?;
    let figure = figure.sized(
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    );

    let data = to_js(&figure.data)?;
    let layout = to_js(&figure.layout)?;
    let config = to_js(&figure.config)?;
    let (plotly, new_plot) = plotly_method(&["newPlot"])?;
    let args = js_sys::Array::of4(&JsValue::from_str(container_id), &data, &layout, &config);
    new_plot
        .apply(&plotly, &args)
        .map_err(|e| plotly_error(&e))?;

    watch_resize(container_id);
    Ok(())
}

/// Keep a single resize listener for the plot; the previous one is removed
/// before the new one is attached.
fn watch_resize(container_id: &str) {
    let Some(window) = crate::dom::window() else {
        return;
    };
    RESIZE_LISTENER.with(|slot| {
        drop(slot.borrow_mut().take());
        let id = container_id.to_string();
        let listener = EventListener::new(&window, "resize", move |_| {
            let Some(el) = crate::dom::element_by_id(&id) else {
                return;
            };
            let resized = plotly_method(&["Plots", "resize"])
                .and_then(|(plots, resize)| resize.call1(&plots, &el).map_err(|e| plotly_error(&e)));
            if let Err(err) = resized {
                log::warn!("plot resize failed: {err}");
            }
        });
        *slot.borrow_mut() = Some(listener);
    });
}

/// Detach the resize listener, if any.
pub fn release() {
    RESIZE_LISTENER.with(|slot| drop(slot.borrow_mut().take()));
}
