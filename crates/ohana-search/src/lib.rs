//! Search resolution engine for the location directory.
//!
//! A request flows through [`query::validate`], anchor resolution in
//! [`geocode`], every active [`matchers::Matcher`], [`combine::combine`],
//! [`distance::apply_distance`], [`rank::rank`] and finally
//! [`paginate::paginate`]. [`SearchEngine`] wires those stages together.

pub mod combine;
pub mod corpus;
pub mod distance;
pub mod engine;
pub mod error;
pub mod geocode;
pub mod matchers;
pub mod normalize;
pub mod paginate;
pub mod policy;
pub mod query;
pub mod rank;
pub mod settings;

pub use combine::MatchCandidate;
pub use corpus::{Corpus, CorpusError, InMemoryCorpus};
pub use engine::{SearchEngine, SearchHit, SearchResult};
pub use error::{SearchError, ValidationError};
pub use geocode::{Anchor, DisabledGeocoder, Geocoder, ResolutionFailure, StaticGeocoder};
pub use matchers::{FilterKind, Matcher};
pub use paginate::Page;
pub use policy::RequiredFilterPolicy;
pub use query::{SearchParams, SearchQuery, SortMode};
pub use settings::SearchSettings;
