use inventory::config::{default_webview_data_dir, AppConfig};
use inventory::ui::app::App;
use inventory::ui::services::AppServices;
use tracing::Level;

fn main() {
    let config = AppConfig::load().expect("should load configuration");
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    dioxus::logger::init(level).expect("should initialize logger");

    let services = AppServices::from_config(config).expect("should build application services");
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Product Inventory"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);
}
