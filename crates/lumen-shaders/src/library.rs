//! Shader effect registry
//!
//! Maps effect names to GLSL program text. The library is built once at
//! startup, optionally extended with [`ShaderLibrary::register`], and then
//! shared read-only with the renderer.

use crate::effects::{ALL_SHADERS, BundledShader};
use crate::{EntryPoint, ShaderError, declared_uniforms, shader_sharing_inputs};

/// A named fragment shader program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderEffect {
    name: String,
    source: String,
    entry_point: Option<EntryPoint>,
    inputs: Vec<String>,
}

impl ShaderEffect {
    /// Create an effect from raw program text
    ///
    /// The entry point is detected from the source. The inputs are the names
    /// declared with `uniform`, followed for `mainImage` programs by the
    /// implicit shader-sharing inputs the source reads. The text itself is
    /// kept untouched.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let entry_point = EntryPoint::detect(&source);
        let mut inputs: Vec<String> = declared_uniforms(&source)
            .into_iter()
            .map(str::to_string)
            .collect();
        if entry_point == Some(EntryPoint::MainImage) {
            for name in shader_sharing_inputs(&source) {
                if !inputs.iter().any(|i| i == name) {
                    inputs.push(name.to_string());
                }
            }
        }
        Self {
            name: name.into(),
            source,
            entry_point,
            inputs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw GLSL text, byte-for-byte as registered
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Entry-point convention, `None` if no `main`/`mainImage` was found
    pub fn entry_point(&self) -> Option<EntryPoint> {
        self.entry_point
    }

    /// Inputs the renderer must supply each frame
    ///
    /// Declared uniforms, plus the implicit inputs of a `mainImage` program.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }
}

impl From<&BundledShader> for ShaderEffect {
    fn from(bundled: &BundledShader) -> Self {
        Self {
            name: bundled.name.to_string(),
            source: bundled.source.to_string(),
            entry_point: Some(bundled.entry_point),
            inputs: bundled.inputs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Name-to-source registry of background effects
#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    /// Effects in registration order
    effects: Vec<ShaderEffect>,
}

impl ShaderLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library holding every bundled effect
    pub fn builtin() -> Self {
        let library = Self {
            effects: ALL_SHADERS.iter().map(|s| ShaderEffect::from(*s)).collect(),
        };
        log::info!("Shader library loaded {} bundled effects", library.len());
        library
    }

    /// Add an effect, rejecting a name that is already registered
    pub fn register(&mut self, effect: ShaderEffect) -> Result<(), ShaderError> {
        if self.contains(effect.name()) {
            return Err(ShaderError::DuplicateEffect(effect.name));
        }
        log::debug!("Registered shader effect: {}", effect.name);
        self.effects.push(effect);
        Ok(())
    }

    /// Look up an effect by name
    pub fn get(&self, name: &str) -> Result<&ShaderEffect, ShaderError> {
        self.effects.iter().find(|e| e.name == name).ok_or_else(|| {
            log::debug!("Shader effect not found: {}", name);
            ShaderError::NotFound(name.to_string())
        })
    }

    /// Look up the GLSL text of an effect by name
    pub fn get_shader_source(&self, name: &str) -> Result<&str, ShaderError> {
        self.get(name).map(ShaderEffect::source)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }

    /// Effect names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.effects.iter().map(ShaderEffect::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShaderEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShaderLibrary {
    type Item = &'a ShaderEffect;
    type IntoIter = std::slice::Iter<'a, ShaderEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}
