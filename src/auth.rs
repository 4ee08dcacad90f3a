use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Builds the `Authorization` value Harvest expects: the API key as the
/// Basic-Auth user name with an empty password.
///
/// The key is not validated; an empty key still yields a header.
pub fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{api_key}:")))
}
