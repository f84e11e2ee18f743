use std::path::Path;

use super::*;

#[test]
fn roster_preserves_declaration_order() {
    let roster = BrandRoster::new(["Crompton", "Atomberg", "Usha"]).unwrap();
    let names: Vec<&str> = roster.iter().collect();
    assert_eq!(names, vec!["Crompton", "Atomberg", "Usha"]);
    assert_eq!(roster.len(), 3);
}

#[test]
fn roster_trims_names() {
    let roster = BrandRoster::new(["  Orient Electric "]).unwrap();
    assert_eq!(roster.names(), ["Orient Electric".to_string()]);
}

#[test]
fn roster_rejects_empty_list() {
    let result = BrandRoster::new(Vec::<String>::new());
    assert!(
        matches!(result, Err(ConfigError::Validation(_))),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn roster_rejects_blank_name() {
    let result = BrandRoster::new(["Atomberg", "   "]);
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("non-empty")),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn roster_rejects_case_insensitive_duplicates() {
    let result = BrandRoster::new(["Havells", "HAVELLS"]);
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("duplicate")),
        "expected duplicate Validation error, got: {result:?}"
    );
}

#[test]
fn parse_brands_reads_yaml() {
    let yaml = r"
brands:
  - name: Atomberg
    notes: home brand
  - name: V-Guard
";
    let roster = parse_brands(yaml).unwrap();
    assert_eq!(
        roster.names(),
        ["Atomberg".to_string(), "V-Guard".to_string()]
    );
}

#[test]
fn parse_brands_rejects_malformed_yaml() {
    let result = parse_brands("brands: [name: ");
    assert!(
        matches!(result, Err(ConfigError::BrandsFileParse(_))),
        "expected BrandsFileParse, got: {result:?}"
    );
}

#[test]
fn load_brands_reports_missing_file() {
    let result = load_brands(Path::new("/definitely/not/here/brands.yaml"));
    assert!(
        matches!(result, Err(ConfigError::BrandsFileIo { .. })),
        "expected BrandsFileIo, got: {result:?}"
    );
}

#[test]
fn shipped_brands_file_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/brands.yaml");
    let roster = load_brands(&path).expect("shipped config/brands.yaml should be valid");
    assert_eq!(roster.len(), 9);
    assert_eq!(roster.names()[0], "Atomberg");
}
