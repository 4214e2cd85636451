//! Client configuration and initialization

use once_cell::sync::Lazy;
use souk_http::client::{SoukClient, error::ClientError};
use std::sync::Mutex;
use web_sys::window;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<SoukClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the shared same-origin client instance
///
/// Every request carries the session cookie implicitly because it stays on
/// the dashboard's own origin; there is nothing to authenticate here.
pub fn create_client() -> Result<SoukClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = SoukClient::builder().base_url(get_base_url()).build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
