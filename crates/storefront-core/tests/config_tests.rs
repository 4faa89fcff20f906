use std::io::Write;
use storefront_core::{ConfigError, CurrencyFormatter, Storefront, StorefrontConfig};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
phone = "5491112345678"

[delivery]
fee = 900

[currency]
symbol = "US$"
thousands_separator = ","
decimal_separator = "."
fraction_digits = 2
symbol_spacing = false
"#
    )
    .unwrap();

    let config = StorefrontConfig::from_path(file.path()).unwrap();
    assert_eq!(config.phone, "5491112345678");
    assert_eq!(config.delivery.fee, 900);

    let storefront = Storefront::new(config);
    assert_eq!(storefront.currency().format(1500), "US$1,500.00");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = StorefrontConfig::from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
