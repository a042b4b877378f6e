use converter::app::App;
use converter::config::ConverterConfig;
use converter::ui::theme::ThemeConfig;
use converter::ui::widgets::header::TITLE;
use converter::ui::{window_icon, ConverterWindow};
use converter::debug;

fn main() -> eframe::Result<()> {
    // Optional .env with EXCHANGE_API_KEY
    let dotenv = dotenvy::dotenv();

    debug::init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let config = ConverterConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        has_api_key = config.has_api_key(),
        debug_mode = debug::is_debug_mode(),
        "Starting converter"
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_inner_size([460.0, 700.0])
        .with_min_inner_size([420.0, 640.0])
        .with_resizable(true);

    if let Some(icon) = window_icon() {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = App::new(&config);

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(ConverterWindow::new(cc, app, ThemeConfig::default())))),
    )
}
