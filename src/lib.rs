pub mod app;
pub mod data;
pub mod error;
pub mod events;
pub mod model;
pub mod physics;
pub mod quiz;
pub mod time;
pub mod ui;
pub mod view_models;

pub use app::{ExplainerApp, LaunchOptions, LessonIntent, LessonShell};

pub const APP_TITLE: &str = "Physics Explainers";

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::{ExplainerApp, LaunchOptions};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    const CANVAS_ID: &str = "explainer_canvas";

    #[wasm_bindgen(start)]
    pub fn start() {
        eframe::WebLogger::init(log::LevelFilter::Info).ok();
        wasm_bindgen_futures::spawn_local(async {
            if let Err(e) = run().await {
                log::error!("failed to start: {e:?}");
            }
        });
    }

    async fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let options = LaunchOptions::from_query_with(&window.location().search()?, |raw| {
            js_sys::decode_uri_component(raw).ok()?.as_string()
        });
        let canvas = window
            .document()
            .ok_or("no document")?
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(ExplainerApp::new(options)?))),
            )
            .await
    }
}
