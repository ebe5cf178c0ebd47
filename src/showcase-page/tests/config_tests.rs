//! Configuration loading and logging setup tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use showcase_detect::{BrowserProfile, FeatureRegistry};
use showcase_dom::{ScrollBehavior, SessionHistory};
use showcase_page::{
    LogConfig, Page, PageConfig, PageError, PageEvent, init_logging, showcase_document_with,
};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[logging]
level = "debug"

[detector]
not_supported_label = "Unavailable"

[navigation]
scroll_behavior = "auto"
"#,
    );

    let config = PageConfig::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.detector.not_supported_label, "Unavailable");
    assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Auto);
    assert!(config.features.is_none());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PageConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PageError::Io(_))));
}

#[test]
fn test_load_invalid_file() {
    let file = write_config("[navigation\nscroll_behavior = ");
    assert!(matches!(
        PageConfig::load(file.path()),
        Err(PageError::Config(_))
    ));
}

#[test]
fn test_configured_page_end_to_end() {
    let file = write_config(
        r#"
[detector]
not_supported_label = "Unavailable"

[navigation]
tab_class = "tab"
section_class = "panel"

[[features]]
id = "observer"
name = "IntersectionObserver"
section = "scroll-reveal"
probe = { kind = "global", name = "IntersectionObserver" }

[[features]]
id = "snap"
name = "Scroll Snap"
section = "carousel"
probe = { kind = "style", property = "scroll-snap-type", value = "x mandatory" }
"#,
    );
    let config = PageConfig::load(file.path()).unwrap();
    let registry: FeatureRegistry = config.registry().unwrap();
    let document = showcase_document_with(&registry, &config.detector, &config.navigation).unwrap();
    let history = SessionHistory::from_url("https://showcase.test/#carousel").unwrap();

    let profile = BrowserProfile::none().with_global("IntersectionObserver");
    let mut page = Page::new(document, history, profile, config).unwrap();
    page.dispatch(PageEvent::DomContentLoaded).unwrap();

    assert_eq!(page.results().len(), 2);
    assert_eq!(page.results().get("observer"), Some(&true));
    assert_eq!(page.results().get("snap"), Some(&false));
    assert_eq!(page.active_section(), Some("carousel"));

    let document = page.document();
    let carousel = document.element_by_id("carousel").unwrap();
    assert!(document.has_class(carousel, "panel"));
    assert!(document.has_class(carousel, "active"));
    let badge = document
        .find_descendant_by_class(carousel, "support-badge")
        .unwrap();
    assert_eq!(document.text_content(badge), "Unavailable");
}

#[test]
fn test_logging_installs_once() {
    let config = LogConfig {
        level: String::from("debug"),
        json: true,
    };
    let first = init_logging(&config);
    assert!(first.is_ok());

    let second = init_logging(&LogConfig::default());
    assert!(matches!(second, Err(PageError::Logging(_))));
}
