// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, ReopenPolicy};
use iced_folio::content;
use iced_folio::i18n::fluent::I18n;
use iced_folio::media::documents;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-about"), "About");

    // 2. Change config to it
    let mut italian_config = Config::default();
    italian_config.general.language = Some("it".to_string());
    config::save_to_path(&italian_config, &temp_config_file_path)
        .expect("Failed to write italian config file");

    let loaded_italian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load italian config from path");
    let i18n_it = I18n::new(None, None, &loaded_italian_config);
    assert_eq!(i18n_it.current_locale().to_string(), "it");
    assert_eq!(i18n_it.tr("nav-about"), "Chi sono");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn settings_file_tunes_reveal_and_gallery() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[reveal]\nthreshold = 0.4\n\n[gallery]\nreopen_at = \"first\"\n",
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.reveal.threshold, Some(0.4));
    assert_eq!(loaded.gallery.reopen_at, ReopenPolicy::First);
    assert_eq!(loaded.reveal.duration_ms, Some(config::DEFAULT_REVEAL_DURATION_MS));
}

#[test]
fn every_user_facing_key_is_translated() {
    let mut keys: Vec<&str> = vec![
        "window-title",
        "hero-love",
        "hero-cv",
        "about-welcome",
        "section-experience",
        "section-skills",
        "section-projects",
        "gallery-title",
        "gallery-view-post",
        "image-loading",
        "nav-resume",
        "notification-link-copied",
        "notification-config-load-error",
    ];
    keys.extend(iced_folio::ui::layout::SectionId::ALL.map(|s| s.nav_key()));
    for document in content::documents() {
        keys.push(document.label_key);
        keys.push(document.caption_key);
    }
    for project in content::projects() {
        keys.push(project.status.i18n_key());
    }

    for locale in ["en-US", "it"] {
        let i18n = I18n::new(Some(locale.into()), None, &Config::default());
        for key in &keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{locale} lacks {key}"
            );
        }
    }
}

#[test]
fn documents_export_from_configured_directory() {
    let source_dir = tempdir().expect("source dir");
    let target_dir = tempdir().expect("target dir");
    let resume = content::profile().resume;
    std::fs::write(source_dir.path().join(resume.file_name), b"%PDF-1.4").expect("write pdf");

    let mut settings = Config::default();
    settings.content.documents_dir = Some(source_dir.path().to_path_buf());

    let source = documents::resolve(settings.documents_dir().as_deref(), resume)
        .expect("resume resolves");
    let destination = target_dir.path().join("resume.pdf");
    let bytes = documents::export(&source, &destination).expect("export");
    assert_eq!(bytes, 8);
    assert_eq!(std::fs::read(&destination).expect("read copy"), b"%PDF-1.4");
}
