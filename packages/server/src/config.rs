use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// Which claim classifier the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    /// Ask OpenAI for the category
    Remote,
    /// Keyword membership, no network
    Local,
}

impl FromStr for ClassifierKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" | "keyword" => Ok(Self::Local),
            other => Err(anyhow!("unknown classifier '{}', expected remote or local", other)),
        }
    }
}

/// Which embedder builds the corpus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderKind {
    OpenAI,
    Hashing,
}

impl FromStr for EmbedderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "hashing" | "local" => Ok(Self::Hashing),
            other => Err(anyhow!("unknown embedder '{}', expected openai or hashing", other)),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub corpus_dir: String,
    pub classifier: ClassifierKind,
    pub embedder: EmbedderKind,
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = non_empty("OPENAI_API_KEY");
        let google_api_key = non_empty("GOOGLE_API_KEY");

        let classifier = match non_empty("CLASSIFIER") {
            Some(value) => value.parse().context("CLASSIFIER is invalid")?,
            None if openai_api_key.is_some() => ClassifierKind::Remote,
            None => ClassifierKind::Local,
        };

        let embedder = match non_empty("EMBEDDER") {
            Some(value) => value.parse().context("EMBEDDER is invalid")?,
            None if openai_api_key.is_some() => EmbedderKind::OpenAI,
            None => EmbedderKind::Hashing,
        };

        Ok(Self {
            port: non_empty("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: non_empty("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://facts_checker.db?mode=rwc".to_string()),
            corpus_dir: non_empty("CORPUS_DIR").unwrap_or_else(|| "data".to_string()),
            classifier,
            embedder,
            openai_api_key,
            google_api_key,
        })
    }

    /// Whether no remote provider key is configured.
    pub fn is_offline(&self) -> bool {
        self.openai_api_key.is_none() && self.google_api_key.is_none()
    }
}
