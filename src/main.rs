#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use physics_explainers::{APP_TITLE, ExplainerApp, LaunchOptions};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // physics_explainers_bin [lesson] [phase]
    let mut args = std::env::args().skip(1);
    let lesson = args.next().and_then(|raw| match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    });
    let options = LaunchOptions {
        lesson,
        phase: args.next(),
    };

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(|_cc| Ok(Box::new(ExplainerApp::new(options)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
