//! Tests for building a client from the environment.
//!
//! Environment variables are process-wide, so everything touching
//! `HR_CHAT_API_URL` lives in this one test binary and runs sequentially
//! inside a single test.

use hr_chat_client::{BASE_URL_ENV_VAR, Client, HrChatError};

#[test]
fn test_from_env() {
    // SAFETY: this is the only test in this binary, so no other thread reads
    // or writes the environment concurrently.
    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
    let err = Client::from_env().unwrap_err();
    assert!(matches!(err, HrChatError::Config(_)), "got {err:?}");
    assert!(err.to_string().contains("HR_CHAT_API_URL"));

    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "   ") };
    assert!(matches!(
        Client::from_env().unwrap_err(),
        HrChatError::Config(_)
    ));

    unsafe { std::env::set_var(BASE_URL_ENV_VAR, " https://hr.example.com/ ") };
    let client = Client::from_env().unwrap();
    assert_eq!(client.base_url(), "https://hr.example.com");

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
}
