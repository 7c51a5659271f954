//! Content loading functional tests
//!
//! Exercises the full path from a config file to the shader library and
//! tutorial catalog handed to the renderer and tutorial display.

mod common;

use std::path::PathBuf;
use std::thread;

use common::{SMALL_CATALOG, TestEnvironment, titles};
use lumen::{Content, ContentError, EntryPoint, ShaderError, TutorialCatalog, TutorialError};

// === Shader library ===

#[test]
fn test_every_bundled_effect_has_source() {
    let content = Content::bundled().unwrap();
    for name in ["greyWave", "colorWave", "sparcleWave", "halo"] {
        let source = content.shaders().get_shader_source(name).unwrap();
        assert!(!source.is_empty());
        assert!(source.contains("main"));
    }
}

#[test]
fn test_missing_effect_is_not_found() {
    let content = Content::bundled().unwrap();
    let err = content.shaders().get_shader_source("doesNotExist").unwrap_err();
    assert_eq!(err, ShaderError::NotFound("doesNotExist".to_string()));
    assert_eq!(err.to_string(), "Shader effect not found: doesNotExist");
}

#[test]
fn test_entry_point_conventions_are_reported() {
    let content = Content::bundled().unwrap();
    let conventions: Vec<_> = content
        .shaders()
        .iter()
        .map(|e| (e.name(), e.entry_point()))
        .collect();
    assert_eq!(
        conventions,
        vec![
            ("greyWave", Some(EntryPoint::Main)),
            ("colorWave", Some(EntryPoint::Main)),
            ("sparcleWave", Some(EntryPoint::Main)),
            ("halo", Some(EntryPoint::MainImage)),
        ]
    );
}

// === Tutorial catalog ===

#[test]
fn test_bundled_topic_order() {
    let content = Content::bundled().unwrap();
    assert_eq!(
        titles(content.tutorial()),
        vec![
            "Create & Save Projects",
            "Blocks & Connections",
            "Lighting Console",
            "Custom OSC",
            "MIDI",
            "Sound2Light",
            "Media & Presentations",
            "Advanced Effects",
        ]
    );
}

#[test]
fn test_bundled_slide_counts() {
    let content = Content::bundled().unwrap();
    let catalog = content.tutorial();
    assert_eq!(catalog.topic("Create & Save Projects").unwrap().len(), 4);
    assert_eq!(catalog.topic("Sound2Light").unwrap().len(), 17);
    assert!(catalog.list_topics().iter().all(|t| !t.slides.is_empty()));
}

#[test]
fn test_connect_category() {
    let content = Content::bundled().unwrap();
    let connect: Vec<&str> = content
        .tutorial()
        .topics_by_category("Connect")
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(connect, vec!["Lighting Console", "Custom OSC", "MIDI"]);
    assert!(content.tutorial().topics_by_category("Advanced").is_empty());
}

#[test]
fn test_catalog_file_round_trip() {
    let env = TestEnvironment::new();
    let catalog = TutorialCatalog::bundled().unwrap();
    let path = env.write_catalog("exported.toml", &catalog.to_toml_string().unwrap());

    let reloaded = TutorialCatalog::load_from(&path).unwrap();
    assert_eq!(reloaded, catalog);
    assert_eq!(titles(&reloaded), titles(&catalog));
    for (a, b) in reloaded.list_topics().iter().zip(catalog.list_topics()) {
        assert_eq!(a.slides, b.slides);
    }
}

#[test]
fn test_image_paths_follow_folders() {
    let content = Content::bundled().unwrap();
    let midi = content.tutorial().topic("MIDI").unwrap();
    let paths = content.assets().image_paths(midi);
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[2], PathBuf::from("images/tutorial/connect/midi.png"));
}

// === Configuration ===

#[test]
fn test_config_selects_background_and_assets() {
    let env = TestEnvironment::new();
    env.write_config(
        r#"
        [shaders]
        background_effect = "sparcleWave"

        [tutorial]
        asset_root = "/usr/share/lumen/tutorial"
        image_extension = "jpg"
        "#,
    );

    let content = Content::load(&env.load_config()).unwrap();
    assert_eq!(content.background_shader().unwrap().name(), "sparcleWave");

    let projects = content.tutorial().topic("Create & Save Projects").unwrap();
    assert_eq!(
        content.assets().image_path(projects, &projects.slides[0]),
        PathBuf::from("/usr/share/lumen/tutorial/basics/tutorial.jpg")
    );
}

#[test]
fn test_config_catalog_override() {
    let env = TestEnvironment::new();
    env.write_catalog("tutorial.toml", SMALL_CATALOG);
    env.write_config("[tutorial]\ncatalog = \"tutorial.toml\"\n");

    let content = Content::load(&env.load_config()).unwrap();
    assert_eq!(titles(content.tutorial()), vec!["Getting Started", "Saving"]);
    assert_eq!(content.tutorial().categories(), vec!["Basics"]);
}

#[test]
fn test_invalid_catalog_override_is_not_replaced() {
    let env = TestEnvironment::new();
    env.write_catalog(
        "tutorial.toml",
        "[[topics]]\ncategory = \"Basics\"\ntitle = \"Empty\"\nfolder = \"basics\"\nslides = []\n",
    );
    env.write_config("[tutorial]\ncatalog = \"tutorial.toml\"\n");

    match Content::load(&env.load_config()) {
        Err(ContentError::Tutorial(TutorialError::EmptyTopic(title))) => assert_eq!(title, "Empty"),
        other => panic!("Expected EmptyTopic, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_catalog_override() {
    let env = TestEnvironment::new();
    env.write_config("[tutorial]\ncatalog = \"missing.toml\"\n");

    let result = Content::load(&env.load_config());
    assert!(matches!(
        result,
        Err(ContentError::Tutorial(TutorialError::ReadError(_, _)))
    ));
}

#[test]
fn test_unknown_background_effect() {
    let env = TestEnvironment::new();
    env.write_config("[shaders]\nbackground_effect = \"sparkleWave\"\n");

    let err = Content::load(&env.load_config()).unwrap_err();
    assert!(matches!(err, ContentError::Shader(ShaderError::NotFound(_))));
}

// === Sharing ===

#[test]
fn test_concurrent_readers() {
    let shared = Content::bundled().unwrap().into_shared();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let halo = shared.shaders.get_shader_source("halo").unwrap().len();
                let s2l = shared.tutorial.topic("Sound2Light").unwrap().len();
                (halo, s2l)
            })
        })
        .collect();

    let expected = (
        shared.shaders.get_shader_source("halo").unwrap().len(),
        17,
    );
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
