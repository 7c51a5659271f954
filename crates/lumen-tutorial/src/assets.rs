//! Slide image path resolution
//!
//! Images live at `<root>/<folder>/<image_key>.<extension>`. Only the path is
//! computed here; loading the file is up to the caller.

use std::path::{Path, PathBuf};

use crate::{TutorialSlide, TutorialTopic};

/// Default directory holding the per-topic image folders
pub const DEFAULT_ASSET_ROOT: &str = "images/tutorial";
/// Default image file extension
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Where slide images are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
    extension: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_ROOT, DEFAULT_IMAGE_EXTENSION)
    }
}

impl AssetLayout {
    /// Create a layout; a leading dot on the extension is ignored
    pub fn new(root: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            root: root.into(),
            extension: extension.as_ref().trim_start_matches('.').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Folder holding a topic's images
    pub fn topic_dir(&self, topic: &TutorialTopic) -> PathBuf {
        self.root.join(&topic.folder)
    }

    /// Path of a slide's image
    pub fn image_path(&self, topic: &TutorialTopic, slide: &TutorialSlide) -> PathBuf {
        let file_name = if self.extension.is_empty() {
            slide.image_key.clone()
        } else {
            format!("{}.{}", slide.image_key, self.extension)
        };
        self.topic_dir(topic).join(file_name)
    }

    /// Paths of every slide image of a topic, in slide order
    pub fn image_paths(&self, topic: &TutorialTopic) -> Vec<PathBuf> {
        topic
            .slides
            .iter()
            .map(|slide| self.image_path(topic, slide))
            .collect()
    }
}
