//! Lumen Tutorial - in-app tutorial content
//!
//! This crate provides:
//! - The bundled tutorial catalog (topics, slides, help text)
//! - Loading and validation of catalog files in TOML form
//! - Category and title lookups for the tutorial menu
//! - Image path resolution for slide illustrations

pub mod assets;
pub mod catalog;
pub mod model;

pub use assets::{AssetLayout, DEFAULT_ASSET_ROOT, DEFAULT_IMAGE_EXTENSION};
pub use catalog::{BUNDLED_CATALOG, TutorialCatalog};
pub use model::{TutorialSlide, TutorialTopic};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorialError {
    #[error("Failed to read {0:?}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to parse tutorial catalog: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize tutorial catalog: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Tutorial catalog has no topics")]
    EmptyCatalog,

    #[error("Tutorial topic has no slides: {0}")]
    EmptyTopic(String),

    #[error("Duplicate tutorial topic title: {0}")]
    DuplicateTitle(String),

    #[error("Duplicate image '{image_key}' in folder '{folder}'")]
    DuplicateImage { folder: String, image_key: String },

    #[error("Tutorial topic not found: {0}")]
    TopicNotFound(String),
}
