//! Tests for the module renderer
//!
//! The checked-in fixtures under `tests/fixtures/` are exactly what the
//! renderer emits for the sample manifest below; the integration tests
//! compile them.

use chrono::{TimeZone, Utc};
use embedfiles::config::Config;
use embedfiles::manifest::{Manifest, ManifestBuilder};
use embedfiles::render::render;

fn sample_manifest() -> Manifest {
    let mut builder = ManifestBuilder::new();
    builder.add_reader("a.txt", 1_700_000_000, &mut &[0x01u8, 0x02, 0x03][..]).unwrap();
    builder.add_reader("b.txt", 0, &mut &b""[..]).unwrap();
    builder.add_reader("web/index.html", -86_400, &mut &b"<h1>embedded</h1>\n"[..]).unwrap();
    builder.finish().unwrap()
}

fn render_string(config: &Config, manifest: &Manifest) -> String {
    let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let mut out = Vec::new();
    render(&mut out, config, manifest, at).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_plain_module_matches_fixture() {
    let config = Config::new("plain", "Assets");
    let text = render_string(&config, &sample_manifest());
    assert_eq!(text, include_str!("../fixtures/plain_module.rs"));
}

#[test]
fn test_http_module_matches_fixture() {
    let config = Config::new("http", "web_assets").with_include_http(true);
    let text = render_string(&config, &sample_manifest());
    assert_eq!(text, include_str!("../fixtures/http_module.rs"));
}

#[test]
fn test_var_named_like_std_item_matches_fixture() {
    let config = Config::new("epoch", "UNIX_EPOCH");
    config.validate().unwrap();
    let text = render_string(&config, &sample_manifest());

    assert!(!text.contains("use std::time::{Duration, SystemTime, UNIX_EPOCH}"));
    assert_eq!(text, include_str!("../fixtures/epoch_module.rs"));
}

#[test]
fn test_open_shape_follows_flag() {
    let manifest = sample_manifest();

    let plain = render_string(&Config::default(), &manifest);
    assert!(plain.contains("pub fn open(&self, filename: &str) -> io::Result<AssetsFile>"));
    assert!(!plain.contains("HttpFileSystem"));

    let http = render_string(&Config::default().with_include_http(true), &manifest);
    assert!(http.contains("pub fn open(&self, filename: &str) -> io::Result<Box<dyn HttpFile>>"));
    assert!(http.contains("impl HttpFileSystem for AssetsFs"));
}

#[test]
fn test_visibility_follows_var_case() {
    let manifest = sample_manifest();

    let private = render_string(&Config::new("main", "assets"), &manifest);
    assert!(private.contains("    pub(crate) static assets: AssetsFs = AssetsFs {\n"));

    let public = render_string(&Config::new("main", "Assets"), &manifest);
    assert!(public.contains("    pub static Assets: AssetsFs = AssetsFs {\n"));
}

#[test]
fn test_data_array_length() {
    let text = render_string(&Config::default(), &sample_manifest());
    assert!(text.contains("    static ASSETS_DATA: [u8; 21] = [\n"));
}

#[test]
fn test_manifest_entries_in_name_order() {
    let mut builder = ManifestBuilder::new();
    builder.add_reader("zeta", 5, &mut &b"zz"[..]).unwrap();
    builder.add_reader("alpha", 6, &mut &b"a"[..]).unwrap();
    let text = render_string(&Config::default(), &builder.finish().unwrap());

    let alpha = text.find("(\"alpha\", AssetsEntry { ts: 6, offset: 2, size: 1 }),").unwrap();
    let zeta = text.find("(\"zeta\", AssetsEntry { ts: 5, offset: 0, size: 2 }),").unwrap();
    assert!(alpha < zeta);
}

#[test]
fn test_names_are_escaped_as_literals() {
    let mut builder = ManifestBuilder::new();
    builder.add_reader("say \"hi\"\\.txt", 0, &mut &b"x"[..]).unwrap();
    let text = render_string(&Config::default(), &builder.finish().unwrap());

    assert!(text.contains(r#"            "say \"hi\"\\.txt","#));
}

#[test]
fn test_only_timestamp_line_varies() {
    let manifest = sample_manifest();
    let config = Config::default();

    let mut first = Vec::new();
    render(&mut first, &config, &manifest, Utc.timestamp_opt(0, 0).unwrap()).unwrap();
    let mut second = Vec::new();
    render(&mut second, &config, &manifest, Utc.timestamp_opt(1_000_000, 0).unwrap()).unwrap();

    let first = String::from_utf8(first).unwrap();
    let second = String::from_utf8(second).unwrap();
    let differing: Vec<_> =
        first.lines().zip(second.lines()).filter(|(a, b)| a != b).map(|(a, _)| a).collect();
    assert_eq!(differing.len(), 1);
    assert!(differing[0].starts_with("// at "));
}
