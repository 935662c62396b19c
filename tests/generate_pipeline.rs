use rsdevicedetector_codegen::{CodegenError, ConfigManager, DocumentAssembler, GlobalConfig, PREAMBLE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_cached(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config_for(dir: &TempDir, files: &[&str]) -> GlobalConfig {
    ConfigManager::custom()
        .cache_dir(dir.path().join(".cache"))
        .output_path(dir.path().join("src/data.rs"))
        .data_files(files.iter().copied())
        .build()
}

#[test]
fn test_generate_list_and_mapping_tables() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(
        &cache,
        "regexes/bots.yml",
        "- regex: 'a\\\\b'\n  name: 'n'\n  version: ~\n",
    );
    write_cached(
        &cache,
        "regexes/device/mobiles.yml",
        r#"
Acme:
  regex: 'x'
  device: 'tablet'
  models:
    - regex: 'y'
      model: 'Z1'
"#,
    );
    let config = config_for(&dir, &["regexes/bots.yml", "regexes/device/mobiles.yml"]);

    let output = DocumentAssembler::new().generate(&config).unwrap();
    let written = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(written, output.buffer);

    let expected = format!(
        "{}{}",
        PREAMBLE,
        r#"pub static BOTS: [Element; 1] = [
    Element {
        regex: "a\\\\b",
        name: "n",
        version: None,
        category: None,
        url: None,
        producer: None,
    },
];
pub static MOBILES: [(&str, Brand); 1] = [
    ("Acme", Brand {
        regex: "x",
        device: Some("tablet"),
        model: None,
        models: Some(&[
            Model {
                regex: "y",
                model: "Z1",
            },
        ]),
    }),
];

"#
    );
    assert_eq!(written, expected);
}

#[test]
fn test_empty_file_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(&cache, "regexes/client/pim.yml", "");
    write_cached(&cache, "regexes/oss.yml", "[]\n");
    let config = config_for(&dir, &["regexes/client/pim.yml", "regexes/oss.yml"]);

    let output = DocumentAssembler::new().generate(&config).unwrap();
    assert_eq!(output.tables.len(), 1);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        format!("{}pub static OSS: [Element; 0] = [\n];\n", PREAMBLE)
    );
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(&cache, "regexes/oss.yml", "- regex: a\n  name: b\n");
    write_cached(&cache, "regexes/bots.yml", "true\n");
    let config = config_for(&dir, &["regexes/oss.yml", "regexes/bots.yml"]);

    fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
    fs::write(&config.output_path, "// previous generation\n").unwrap();

    let err = DocumentAssembler::new().generate(&config).unwrap_err();
    assert!(matches!(err, CodegenError::UnsupportedShape { kind: "bool", .. }));
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "// previous generation\n"
    );
}

#[test]
fn test_missing_cache_file_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, &["regexes/bots.yml"]);

    let err = DocumentAssembler::new().generate(&config).unwrap_err();
    assert!(matches!(err, CodegenError::FileError { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_generation_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(
        &cache,
        "regexes/device/televisions.yml",
        "Zeta:\n  regex: 'z'\n  model: ''\nAlpha:\n  regex: 'a \"q\"'\n",
    );
    let config = config_for(&dir, &["regexes/device/televisions.yml"]);

    let first = DocumentAssembler::new().generate(&config).unwrap();
    let second = DocumentAssembler::new().generate(&config).unwrap();
    assert_eq!(first.buffer, second.buffer);

    let zeta = first.buffer.find("(\"Zeta\"").unwrap();
    let alpha = first.buffer.find("(\"Alpha\"").unwrap();
    assert!(zeta < alpha);
    assert!(first.buffer.contains("        model: Some(\"\"),\n"));
    assert!(first.buffer.contains("        regex: \"a \\\"q\\\"\",\n"));
}

#[test]
fn test_vendor_fragment_lists_become_brand_entries() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(
        &cache,
        "regexes/vendorfragments.yml",
        "Dell:\n  - 'MDDR(JS)?'\n  - 'MAAR'\nSony:\n  - 'SNY'\n",
    );
    let config = config_for(&dir, &["regexes/vendorfragments.yml"]);

    let output = DocumentAssembler::new().generate(&config).unwrap();
    assert_eq!(output.tables[0].records, 3);

    let written = fs::read_to_string(&config.output_path).unwrap();
    let table = written.strip_prefix(PREAMBLE).unwrap();
    assert!(table.starts_with("pub static VENDORFRAGMENTS: [(&str, Brand); 3] = [\n"));
    assert!(table.contains(
        r#"    ("Dell", Brand {
        regex: "MAAR",
        device: None,
        model: None,
        models: None,
    }),
"#
    ));
    assert_eq!(table.matches("(\"Sony\", Brand {").count(), 1);
}

#[test]
fn test_fractional_version_fails_generation() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join(".cache");
    write_cached(&cache, "regexes/oss.yml", "- regex: a\n  name: b\n  version: 1.10\n");
    let config = config_for(&dir, &["regexes/oss.yml"]);

    let err = DocumentAssembler::new().generate(&config).unwrap_err();
    assert!(matches!(err, CodegenError::MalformedRecord { .. }));
    assert!(!config.output_path.exists());
}
