// SPDX-License-Identifier: MPL-2.0
use iiif_viewer::config::{self, Config};
use iiif_viewer::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("viewer-menu-close"), "Close");

    let mut japanese_config = Config::default();
    japanese_config.general.language = Some("ja".to_string());
    config::save_to_path(&japanese_config, &temp_config_file_path)
        .expect("Failed to write japanese config file");

    let loaded_japanese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load japanese config from path");
    let i18n_ja = I18n::new(None, &loaded_japanese_config);
    assert_eq!(i18n_ja.current_locale().to_string(), "ja");
    assert_eq!(i18n_ja.tr("viewer-menu-close"), "閉じる");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_search_section_survives_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut original = Config::default();
    original.search.endpoint = Some("https://search.example.org/api".to_string());
    original.search.default_rows = Some(40);
    config::save_to_path(&original, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to read config");
    assert_eq!(loaded.search.endpoint(), Some("https://search.example.org/api"));
    assert_eq!(loaded.search.rows_input(), "40");
}

#[test]
fn test_every_locale_translates_every_key() {
    for lang in ["en-US", "ja"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in [
            "app-title",
            "viewer-menu-close",
            "viewer-toggle-list",
            "viewer-toggle-icons",
            "search-modal-title",
            "search-button",
            "search-card-open",
            "workspace-open-search",
        ] {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{lang} lacks {key}");
        }
    }
}
