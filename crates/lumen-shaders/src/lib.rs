//! Lumen Shaders - background effect library
//!
//! This crate provides:
//! - The bundled GLSL fragment shaders used as GUI backgrounds
//! - A name-to-source registry handed to the renderer
//! - Entry-point and uniform inspection so the renderer can bind inputs
//!
//! Compilation, uniform binding and per-frame updates belong to the renderer.

pub mod effects;
pub mod library;
pub mod program;

pub use effects::{ALL_SHADERS, BundledShader, bundled_shader_names, get_bundled_shader};
pub use library::{ShaderEffect, ShaderLibrary};
pub use program::{EntryPoint, SHADER_SHARING_INPUTS, declared_uniforms, shader_sharing_inputs};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    #[error("Shader effect not found: {0}")]
    NotFound(String),

    #[error("Shader effect already registered: {0}")]
    DuplicateEffect(String),
}
