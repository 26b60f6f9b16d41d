use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_empty_gateway_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("MF_GATEWAY_URL", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_http_gateway_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("MF_GATEWAY_URL", "ftp://files.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_gateway_url_and_key_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("MF_GATEWAY_URL", "https://abc.supabase.co");
    let _key = EnvGuard::set("MF_GATEWAY_ANON_KEY", "public-anon-key");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_blank_anon_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("MF_GATEWAY_ANON_KEY", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
