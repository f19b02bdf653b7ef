pub mod settings;

pub use settings::{
    CatalogSettings, DisplaySettings, Environment, LogFormat, OutputFormat, RemovalPolicy,
    Settings, TelemetrySettings,
};
