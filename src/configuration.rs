use config::{Config, File, FileFormat};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application_port: u16,
    pub firestore: FirestoreSettings,
    pub collections: CollectionSettings,
}

#[derive(Deserialize, Clone)]
pub struct FirestoreSettings {
    pub project_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct CollectionSettings {
    #[serde(default = "default_screenings_base")]
    pub screenings_base: String,
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_screenings_base() -> String {
    "website-by-date-screenings".to_string()
}

pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let mut builder = Config::builder();
    builder = builder.add_source(File::new(filename, FileFormat::Json));
    let config = builder.build()?;
    config.try_deserialize()
}
