//! Tutorial data types

use serde::{Deserialize, Serialize};

/// One slide: an illustration and its help text
///
/// `text` is rich text using only `<b>`, `</b>`, `<br>`, `&lt;` and `&gt;`.
/// It is passed through to the display untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialSlide {
    /// Image file stem, resolved inside the topic's folder
    pub image_key: String,
    pub text: String,
}

impl TutorialSlide {
    pub fn new(image_key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image_key: image_key.into(),
            text: text.into(),
        }
    }
}

/// A titled group of slides shown as one tutorial entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialTopic {
    /// Menu group, e.g. "Basics"
    pub category: String,
    pub title: String,
    /// Image folder for this topic's slides
    pub folder: String,
    /// Slides in presentation order
    pub slides: Vec<TutorialSlide>,
}

impl TutorialTopic {
    /// Get a slide by its position in the presentation
    pub fn slide(&self, index: usize) -> Option<&TutorialSlide> {
        self.slides.get(index)
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
