use thiserror::Error;

/// Errors returned by the geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure, or a non-2xx status from the provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered with a coordinate that is not a WGS84 point.
    #[error("provider returned invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: String, lon: String },
}
