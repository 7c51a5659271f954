//! Tutorial catalog loading and lookups
//!
//! The bundled catalog is a TOML document compiled into the binary. Every
//! load path (bundled, string, file, serde) validates the catalog before
//! handing it out, so a constructed `TutorialCatalog` always satisfies:
//!
//! - at least one topic, and every topic has at least one slide
//! - topic titles are unique
//! - an image key appears once per folder (folders may be shared by topics)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{TutorialError, TutorialTopic};

/// Bundled catalog source
pub const BUNDLED_CATALOG: &str = include_str!("../content/tutorial.toml");

/// Ordered list of tutorial topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct TutorialCatalog {
    /// Topics in menu order
    topics: Vec<TutorialTopic>,
}

/// Catalog as written on disk, before validation
#[derive(Deserialize)]
struct RawCatalog {
    topics: Vec<TutorialTopic>,
}

impl TryFrom<RawCatalog> for TutorialCatalog {
    type Error = TutorialError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.topics)
    }
}

impl TutorialCatalog {
    /// Build a catalog from topics, checking its invariants
    pub fn new(topics: Vec<TutorialTopic>) -> Result<Self, TutorialError> {
        let catalog = Self { topics };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse the catalog compiled into the binary
    pub fn bundled() -> Result<Self, TutorialError> {
        let catalog = Self::from_toml_str(BUNDLED_CATALOG)?;
        log::info!(
            "Loaded bundled tutorial catalog: {} topics, {} slides",
            catalog.len(),
            catalog.slide_count()
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, TutorialError> {
        let raw: RawCatalog = toml::from_str(content)?;
        Self::try_from(raw)
    }

    /// Load a catalog from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, TutorialError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TutorialError::ReadError(path.to_path_buf(), e))?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!("Loaded tutorial catalog from {:?}", path);
        Ok(catalog)
    }

    /// Serialize the catalog to TOML, preserving topic and slide order
    pub fn to_toml_string(&self) -> Result<String, TutorialError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), TutorialError> {
        if self.topics.is_empty() {
            return Err(TutorialError::EmptyCatalog);
        }

        let mut titles = HashSet::new();
        let mut images = HashSet::new();
        for topic in &self.topics {
            if topic.slides.is_empty() {
                return Err(TutorialError::EmptyTopic(topic.title.clone()));
            }
            if !titles.insert(topic.title.as_str()) {
                return Err(TutorialError::DuplicateTitle(topic.title.clone()));
            }
            for slide in &topic.slides {
                if !images.insert((topic.folder.as_str(), slide.image_key.as_str())) {
                    return Err(TutorialError::DuplicateImage {
                        folder: topic.folder.clone(),
                        image_key: slide.image_key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All topics in menu order
    pub fn list_topics(&self) -> &[TutorialTopic] {
        &self.topics
    }

    /// Topics in a category, in catalog order
    ///
    /// An unknown category yields an empty list.
    pub fn topics_by_category(&self, category: &str) -> Vec<&TutorialTopic> {
        let topics: Vec<_> = self
            .topics
            .iter()
            .filter(|t| t.category == category)
            .collect();
        if topics.is_empty() {
            log::debug!("No tutorial topics in category: {}", category);
        }
        topics
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.topics
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Look up a topic by title
    pub fn topic(&self, title: &str) -> Result<&TutorialTopic, TutorialError> {
        self.topics
            .iter()
            .find(|t| t.title == title)
            .ok_or_else(|| TutorialError::TopicNotFound(title.to_string()))
    }

    /// Number of topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false for a validated catalog
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of slides across all topics
    pub fn slide_count(&self) -> usize {
        self.topics.iter().map(TutorialTopic::len).sum()
    }
}
