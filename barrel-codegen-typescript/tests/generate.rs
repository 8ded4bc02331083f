//! Integration tests that discover modules on disk and write barrels.

use std::fs;

use barrelgen_codegen_typescript::{BarrelCodegen, Generator};
use barrelgen_config::{BarrelConfig, LocationMode};
use tempfile::TempDir;

fn project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();
    for file in ["Two.ts", "a/One.ts", "a/b/Foo.ts", "a/notes.md", "c/View.tsx"] {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export default {};\n").unwrap();
    }
    temp
}

fn config(temp: &TempDir) -> BarrelConfig {
    BarrelConfig {
        directory: vec![temp.path().to_path_buf()],
        header: false,
        ..BarrelConfig::default()
    }
}

#[test]
fn test_generate_top_level_barrel() {
    let temp = project();
    let generator = Generator::new(&config(&temp)).expect("Failed to build generator");

    let result = generator.generate().expect("Failed to generate");
    assert_eq!(result.written, vec![temp.path().join("index.ts")]);

    let content = fs::read_to_string(temp.path().join("index.ts")).unwrap();
    assert_eq!(
        content,
        "import Twots from \"./Two\";\n\
         import aOnets from \"./a/One\";\n\
         import abFoots from \"./a/b/Foo\";\n\
         import cViewtsx from \"./c/View\";\n\
         export {Twots as Two};\n\
         export const a = {\n\
         \x20 \"One\": aOnets as JSONSchema,\n\
         \x20 \"b\": {\n\
         \x20   \"Foo\": abFoots as JSONSchema,\n\
         \x20 },\n\
         };\n\
         export const c = {\n  \"View\": cViewtsx as JSONSchema,\n};\n"
    );
}

#[test]
fn test_existing_barrels_are_not_modules() {
    let temp = project();
    let generator = Generator::new(&config(&temp)).unwrap();
    generator.generate().unwrap();

    // Rediscovering sees the written barrel and leaves it out of the imports.
    let again = Generator::new(&config(&temp)).unwrap();
    assert_eq!(again.existing_barrels(), vec![temp.path().join("index.ts")]);
    assert!(!again.preview()[0].content.contains("./index"));

    let result = again.generate().unwrap();
    assert!(result.written.is_empty());
    assert_eq!(result.unchanged.len(), 1);
}

#[test]
fn test_check_detects_stale_barrels() {
    let temp = project();
    let generator = Generator::new(&config(&temp)).unwrap();
    assert!(!generator.check().is_clean());

    generator.generate().unwrap();
    assert!(generator.check().is_clean());

    fs::write(temp.path().join("Three.ts"), "export default {};\n").unwrap();
    let rediscovered = Generator::new(&config(&temp)).unwrap();
    assert_eq!(
        rediscovered.check().stale,
        vec![temp.path().join("index.ts")]
    );
}

#[test]
fn test_all_locations_with_local_modules() {
    let temp = project();
    let config = BarrelConfig {
        location: LocationMode::All,
        local: true,
        ..config(&temp)
    };
    let generator = Generator::new(&config).unwrap();
    let preview = generator.preview();

    let paths: Vec<_> = preview.iter().map(|p| p.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            temp.path().join("index.ts"),
            temp.path().join("a").join("index.ts"),
            temp.path().join("a").join("b").join("index.ts"),
            temp.path().join("c").join("index.ts"),
        ]
    );

    assert_eq!(
        preview[1].content,
        "import Onets from \"./One\";\nexport {Onets as One};\n"
    );
}

#[test]
fn test_exclude_pattern() {
    let temp = project();
    let config = BarrelConfig {
        exclude: vec![r"View\.tsx$".to_string()],
        ..config(&temp)
    };
    let generator = Generator::new(&config).unwrap();

    assert!(!generator.preview()[0].content.contains("View"));
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp = TempDir::new().unwrap();
    let config = BarrelConfig {
        directory: vec![temp.path().join("missing")],
        ..BarrelConfig::default()
    };

    assert!(Generator::new(&config).is_err());
}
