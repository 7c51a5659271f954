//! Lightweight inspection of GLSL program text
//!
//! Only enough scanning to tell the renderer which entry-point convention a
//! program uses and which inputs it reads. Nothing here validates or
//! rewrites the source.

/// Entry-point convention of a fragment shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `void main( void )` writing `gl_FragColor`
    Main,
    /// `void mainImage( out vec4 fragColor, in vec2 fragCoord )`, the
    /// shader-sharing convention; the host must wrap it in its own `main`
    MainImage,
}

impl EntryPoint {
    /// Function name of the entry point
    pub fn function_name(&self) -> &'static str {
        match self {
            EntryPoint::Main => "main",
            EntryPoint::MainImage => "mainImage",
        }
    }

    /// Detect the entry point of a program
    ///
    /// Looks for a `void` function named `mainImage` or `main`. When both
    /// exist `mainImage` wins, since a `main` wrapper around it is host glue.
    pub fn detect(source: &str) -> Option<Self> {
        let mut found = None;
        for name in void_functions(source) {
            match name {
                "mainImage" => return Some(EntryPoint::MainImage),
                "main" => found = Some(EntryPoint::Main),
                _ => {}
            }
        }
        found
    }
}

/// Names of functions declared as `void <name>(`
fn void_functions(source: &str) -> impl Iterator<Item = &str> {
    source.match_indices("void").filter_map(move |(start, _)| {
        // Must be a standalone keyword
        if source[..start]
            .chars()
            .next_back()
            .is_some_and(is_ident_char)
        {
            return None;
        }
        let rest = &source[start + "void".len()..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return None;
        }
        let ident_len = trimmed
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(trimmed.len());
        let (ident, after) = trimmed.split_at(ident_len);
        if !ident.is_empty() && after.trim_start().starts_with('(') {
            Some(ident)
        } else {
            None
        }
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Names declared with a top-level `uniform` qualifier, in source order
///
/// `uniform highp float time;` yields `time`; array suffixes are dropped.
pub fn declared_uniforms(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("uniform "))
        .filter_map(|decl| {
            let decl = decl.split(';').next()?.trim();
            let name = decl.split_whitespace().last()?;
            let name = name.split('[').next()?;
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Inputs the `mainImage` convention binds without declaring them
pub const SHADER_SHARING_INPUTS: &[&str] = &[
    "iResolution",
    "iTime",
    "iTimeDelta",
    "iFrame",
    "iMouse",
    "iDate",
    "iSampleRate",
    "iChannel0",
    "iChannel1",
    "iChannel2",
    "iChannel3",
    "iChannelResolution",
    "iChannelTime",
];

/// Implicit `mainImage` inputs a program reads, in order of first use
pub fn shader_sharing_inputs(source: &str) -> Vec<&'static str> {
    let mut found: Vec<(usize, &'static str)> = SHADER_SHARING_INPUTS
        .iter()
        .filter_map(|name| first_identifier(source, name).map(|pos| (pos, *name)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, name)| name).collect()
}

/// Byte offset of the first standalone occurrence of an identifier
fn first_identifier(source: &str, ident: &str) -> Option<usize> {
    source.match_indices(ident).map(|(start, _)| start).find(|&start| {
        let before = source[..start].chars().next_back();
        let after = source[start + ident.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}
