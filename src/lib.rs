//! Lumen content
//!
//! Builds the two read-only content resources of the editor once at startup:
//!
//! 1. The shader library drawn behind the block editor
//! 2. The tutorial catalog shown by the tutorial panel
//!
//! Neither resource is global. `Content` is constructed from a `Config` and
//! its parts are passed to the renderer and the tutorial display.

use std::sync::Arc;

use thiserror::Error;

pub use lumen_config::{Config, ConfigError, ShaderConfig, TutorialConfig};
pub use lumen_shaders::{EntryPoint, ShaderEffect, ShaderError, ShaderLibrary};
pub use lumen_tutorial::{
    AssetLayout, TutorialCatalog, TutorialError, TutorialSlide, TutorialTopic,
};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Tutorial(#[from] TutorialError),
}

/// The loaded content resources
#[derive(Debug, Clone)]
pub struct Content {
    shaders: ShaderLibrary,
    tutorial: TutorialCatalog,
    assets: AssetLayout,
    background_effect: String,
}

impl Content {
    /// Build the bundled content with default settings
    pub fn bundled() -> Result<Self, ContentError> {
        Self::load(&Config::default())
    }

    /// Build content as described by a configuration
    ///
    /// A catalog override replaces the bundled catalog. The configured
    /// background effect must exist in the shader library.
    pub fn load(config: &Config) -> Result<Self, ContentError> {
        Self::with_shaders(config, ShaderLibrary::builtin())
    }

    /// Build content around a prepared shader library
    pub fn with_shaders(config: &Config, shaders: ShaderLibrary) -> Result<Self, ContentError> {
        let background_effect = config.shaders.background_effect.clone();
        if !shaders.contains(&background_effect) {
            log::debug!("Configured background effect not found: {}", background_effect);
            return Err(ShaderError::NotFound(background_effect).into());
        }

        let tutorial = match &config.tutorial.catalog {
            Some(path) => {
                log::warn!("Using tutorial catalog override {:?}", path);
                TutorialCatalog::load_from(path)?
            }
            None => TutorialCatalog::bundled()?,
        };

        Ok(Self {
            shaders,
            tutorial,
            assets: config.tutorial.asset_layout(),
            background_effect,
        })
    }

    pub fn shaders(&self) -> &ShaderLibrary {
        &self.shaders
    }

    pub fn tutorial(&self) -> &TutorialCatalog {
        &self.tutorial
    }

    pub fn assets(&self) -> &AssetLayout {
        &self.assets
    }

    /// The configured background effect
    pub fn background_shader(&self) -> Result<&ShaderEffect, ShaderError> {
        self.shaders.get(&self.background_effect)
    }

    /// Split into shared handles for the renderer and the tutorial display
    pub fn into_shared(self) -> SharedContent {
        SharedContent {
            shaders: Arc::new(self.shaders),
            tutorial: Arc::new(self.tutorial),
            assets: Arc::new(self.assets),
        }
    }
}

/// Reference-counted handles, cheap to clone across threads
#[derive(Debug, Clone)]
pub struct SharedContent {
    pub shaders: Arc<ShaderLibrary>,
    pub tutorial: Arc<TutorialCatalog>,
    pub assets: Arc<AssetLayout>,
}
