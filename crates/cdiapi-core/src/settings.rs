//! Service settings.
//!
//! [`Settings::load`] layers three sources, later ones winning: the embedded
//! TOML defaults below, an optional config file named by `CDIAPI_CONFIG`,
//! and `CDIAPI_`-prefixed environment variables (e.g. `CDIAPI_MONGO_URL`).
//! [`Settings::defaults`] returns the embedded defaults without touching the
//! environment (useful in tests).

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
port = 8000

# Document store (registry of data catalogs + raw indexed entries)
mongo_url           = "mongodb://localhost:27017"
registry_db         = "cdi"
registry_collection = "catalogs"
entries_db          = "cdisearch"
entries_collection  = "fulldb"

# Search engine
meili_url   = "http://localhost:7090"
meili_index = "fulldb"

# Pagination ceilings; requests above these are rejected with 422,
# never clamped.
max_page   = 500
max_offset = 100000

default_sort = "scores.feature_score:desc"
default_facets = [
    "dataset.datatypes",
    "dataset.formats",
    "dataset.geotopics",
    "dataset.license_id",
    "dataset.topics",
    "source.catalog_type",
    "source.countries.name",
    "source.langs.name",
    "source.macroregions.name",
    "source.name",
    "source.owner_type",
    "source.software.name",
    "source.subregions.name",
]
"#;

/// Cache headers attached to every successful read response.
pub const CACHE_HEADERS: [(&str, &str); 2] = [
    ("Cache-Control", "public; max-age=3600"),
    ("X-Robots-Tag", "none"),
];

// ---------------------------------------------------------------------------
// Public settings type
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub port: u16,

    pub mongo_url: String,
    pub registry_db: String,
    pub registry_collection: String,
    pub entries_db: String,
    pub entries_collection: String,

    pub meili_url: String,
    /// API key for the search engine. Absent means unauthenticated.
    #[serde(default)]
    pub meili_key: Option<String>,
    pub meili_index: String,

    /// Maximum `limit` a caller may request.
    pub max_page: u32,
    /// Maximum `offset` a caller may request.
    pub max_offset: u32,

    /// Default sort specification for the index query endpoint,
    /// `field:direction` tokens separated by commas.
    pub default_sort: String,
    /// Facet fields forwarded to the search engine when facet output is on.
    pub default_facets: Vec<String>,
}

impl Settings {
    /// Load settings from defaults, the optional `CDIAPI_CONFIG` file, and
    /// `CDIAPI_`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Ok(path) = std::env::var("CDIAPI_CONFIG") {
            builder = builder.add_source(config::File::with_name(&path).required(false));
        }

        builder
            .add_source(config::Environment::with_prefix("CDIAPI"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the embedded defaults without consulting the environment.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
