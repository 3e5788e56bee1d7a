//! The `search` subcommand: one query against a corpus file, printed as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use ohana_core::{AppConfig, LocationRecord};
use ohana_geocode::GeocodeClient;
use ohana_search::{
    Corpus, DisabledGeocoder, Geocoder, InMemoryCorpus, SearchEngine, SearchHit, SearchParams,
    SearchSettings,
};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Path to the YAML corpus file (defaults to `OHANA_CORPUS_PATH`)
    #[arg(long)]
    pub corpus: Option<PathBuf>,
    #[arg(long)]
    pub keyword: Option<String>,
    /// Address, city or ZIP code to search near
    #[arg(long)]
    pub location: Option<String>,
    /// "lat,long" anchor; takes precedence over --location
    #[arg(long)]
    pub lat_lng: Option<String>,
    /// Radius in miles (0.1 to 50)
    #[arg(long)]
    pub radius: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub org_name: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub domain: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// `relevance` or `distance`
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub per_page: Option<String>,
}

impl SearchArgs {
    pub(crate) fn to_params(&self) -> SearchParams {
        SearchParams {
            keyword: self.keyword.clone(),
            location: self.location.clone(),
            lat_lng: self.lat_lng.clone(),
            radius: self.radius.clone(),
            category: self.category.clone(),
            org_name: self.org_name.clone(),
            language: self.language.clone(),
            domain: self.domain.clone(),
            email: self.email.clone(),
            sort: self.sort.clone(),
            page: self.page.clone(),
            per_page: self.per_page.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchOutput {
    pub total_count: usize,
    pub locations: Vec<LocationOutput>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocationOutput {
    #[serde(flatten)]
    pub location: LocationRecord,
    pub distance: Option<f64>,
}

impl From<SearchHit> for LocationOutput {
    fn from(hit: SearchHit) -> Self {
        Self {
            location: hit.location,
            distance: hit.distance_miles,
        }
    }
}

/// Run one search and print the result page.
///
/// # Errors
///
/// Returns an error if configuration or the corpus file cannot be loaded,
/// or if a search parameter fails validation.
pub(crate) async fn run_search(args: &SearchArgs) -> anyhow::Result<()> {
    let config = ohana_core::load_app_config()?;
    let corpus_path = args.corpus.clone().unwrap_or_else(|| config.corpus_path.clone());
    let corpus = InMemoryCorpus::from_file(&corpus_path)?;
    let engine = build_engine(&config)?;

    let output = execute(&engine, &corpus, &args.to_params()).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_engine(config: &AppConfig) -> anyhow::Result<SearchEngine> {
    let geocoder: Arc<dyn Geocoder> = match GeocodeClient::from_config(config)? {
        Some(client) => Arc::new(client),
        None => Arc::new(DisabledGeocoder),
    };
    Ok(SearchEngine::new(
        SearchSettings::from_app_config(config),
        geocoder,
    ))
}

pub(crate) async fn execute(
    engine: &SearchEngine,
    corpus: &dyn Corpus,
    params: &SearchParams,
) -> anyhow::Result<SearchOutput> {
    let result = engine.search_params(corpus, params).await?;
    tracing::debug!(
        total = result.total_count,
        page = result.page,
        "search complete"
    );
    Ok(SearchOutput {
        total_count: result.total_count,
        locations: result.hits.into_iter().map(LocationOutput::from).collect(),
    })
}
