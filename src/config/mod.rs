mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod dashboard_config;
pub use self::dashboard_config::DashboardConfig;
pub mod panel_config;
pub use self::panel_config::PanelConfig;
pub mod scalar_config;
pub use self::scalar_config::{ComponentConfig, ComponentValue, ScalarConfig};
pub mod series_config;
pub use self::series_config::SeriesConfig;
pub mod source_config;
pub use self::source_config::SourceConfig;
