use bassa_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BASSA_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("BASSA_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("BASSA_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let result: u64 = get_env_or_default("BASSA_TEST_MISSING_VAR", 5000);
    assert_eq!(result, 5000);
}

#[test]
fn test_get_env_or_default_trims_and_parses() {
    unsafe {
        env::set_var("BASSA_TEST_VAR_INT", " 42 ");
        let result: u32 = get_env_or_default("BASSA_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("BASSA_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BASSA_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("BASSA_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("BASSA_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("BASSA_TEST_VAR_OPTION", "123");
        env::set_var("BASSA_TEST_VAR_OPTION_BAD", "abc");
    }
    assert_eq!(get_env_or_none::<u32>("BASSA_TEST_VAR_OPTION"), Some(123));
    assert_eq!(get_env_or_none::<u32>("BASSA_TEST_VAR_OPTION_BAD"), None);
    assert_eq!(get_env_or_none::<u32>("BASSA_TEST_VAR_OPTION_MISSING"), None);
    unsafe {
        env::remove_var("BASSA_TEST_VAR_OPTION");
        env::remove_var("BASSA_TEST_VAR_OPTION_BAD");
    }
}
