//! Bundled background effects
//!
//! GLSL sources are stored as external .glsl files and included at compile
//! time. The text is handed to the renderer exactly as stored; the numeric
//! constants drive the visual output, so the files must not be reformatted.

use crate::EntryPoint;

/// Inputs the three wave effects declare as uniforms
const WAVE_INPUTS: &[&str] = &["time", "resolution_x", "resolution_y"];

/// Inputs `halo` reads without declaring them (bound by the renderer)
const HALO_INPUTS: &[&str] = &["iChannel0", "iResolution", "iMouse"];

/// Bundled shader data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledShader {
    pub name: &'static str,
    pub source: &'static str,
    pub entry_point: EntryPoint,
    pub inputs: &'static [&'static str],
}

/// Grey wave - thin white sine lines over a noisy grey background
pub const GREY_WAVE: BundledShader = BundledShader {
    name: "greyWave",
    source: include_str!("grey_wave.glsl"),
    entry_point: EntryPoint::Main,
    inputs: WAVE_INPUTS,
};

/// Color wave - glowing orange band sweeping across the screen
pub const COLOR_WAVE: BundledShader = BundledShader {
    name: "colorWave",
    source: include_str!("color_wave.glsl"),
    entry_point: EntryPoint::Main,
    inputs: WAVE_INPUTS,
};

/// Sparkle wave - voronoi-perturbed wave line
pub const SPARCLE_WAVE: BundledShader = BundledShader {
    name: "sparcleWave",
    source: include_str!("sparcle_wave.glsl"),
    entry_point: EntryPoint::Main,
    inputs: WAVE_INPUTS,
};

/// Halo - 13x13 gaussian bloom of bright texels right of the pointer
pub const HALO: BundledShader = BundledShader {
    name: "halo",
    source: include_str!("halo.glsl"),
    entry_point: EntryPoint::MainImage,
    inputs: HALO_INPUTS,
};

/// All bundled shaders, in registry order
pub const ALL_SHADERS: &[&BundledShader] = &[&GREY_WAVE, &COLOR_WAVE, &SPARCLE_WAVE, &HALO];

/// Get a bundled shader by name
pub fn get_bundled_shader(name: &str) -> Option<&'static BundledShader> {
    ALL_SHADERS.iter().find(|s| s.name == name).copied()
}

/// List all bundled shader names
pub fn bundled_shader_names() -> Vec<&'static str> {
    ALL_SHADERS.iter().map(|s| s.name).collect()
}
