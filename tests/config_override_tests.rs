//! Configuration loading with environment overrides.

mod support;

use lunisolar::config::AlmanacConfig;
use support::with_scoped_env;

#[test]
fn test_env_overrides_replace_file_defaults() {
    with_scoped_env(
        &[
            ("ALMANAC_SITE_LAT", Some("28.7624")),
            ("ALMANAC_SITE_LON", Some("-17.8892")),
            ("ALMANAC_SITE_ELEVATION_M", Some("2396")),
            ("ALMANAC_STEP_HOURS", Some("0.25")),
        ],
        || {
            let config = AlmanacConfig::default().with_env_overrides();
            assert_eq!(config.site.latitude, 28.7624);
            assert_eq!(config.site.longitude, -17.8892);
            assert_eq!(config.site.elevation_m, Some(2396.0));
            assert_eq!(config.search.step_hours, 0.25);
        },
    );
}

#[test]
fn test_unset_env_leaves_defaults() {
    with_scoped_env(
        &[
            ("ALMANAC_SITE_LAT", None),
            ("ALMANAC_SITE_LON", None),
            ("ALMANAC_SITE_ELEVATION_M", None),
            ("ALMANAC_STEP_HOURS", None),
        ],
        || {
            let config = AlmanacConfig::default().with_env_overrides();
            assert_eq!(config.site.latitude, 36.0544);
            assert_eq!(config.site.elevation_m, None);
            assert_eq!(config.search.step_hours, 1.0);
        },
    );
}

#[test]
fn test_garbage_env_values_ignored() {
    with_scoped_env(
        &[("ALMANAC_SITE_LAT", Some("not-a-number"))],
        || {
            let config = AlmanacConfig::default().with_env_overrides();
            assert_eq!(config.site.latitude, 36.0544);
        },
    );
}

#[test]
fn test_config_from_env_named_file() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[site]\nlatitude = 51.4769\nlongitude = 0.0").unwrap();
    let path = file.path().to_string_lossy().to_string();

    with_scoped_env(&[("ALMANAC_CONFIG", Some(path.as_str()))], || {
        let config = AlmanacConfig::from_default_location().unwrap();
        assert_eq!(config.site.latitude, 51.4769);
        // Unspecified fields fall back to serde defaults.
        assert_eq!(config.search.step_hours, 1.0);
    });
}
