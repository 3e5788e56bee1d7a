pub mod app_config;
pub mod config;
pub mod corpus;
pub mod locations;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use corpus::{load_corpus, parse_corpus, CorpusFile};
pub use locations::{
    Address, Category, Coordinates, LocationId, LocationRecord, Organization, Phone,
    ServiceRecord,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read corpus file {path}: {source}")]
    CorpusFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file: {0}")]
    CorpusFileParse(#[from] serde_yaml::Error),

    #[error("corpus validation failed: {0}")]
    Validation(String),
}
