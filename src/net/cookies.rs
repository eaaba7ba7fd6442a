use std::collections::HashMap;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

use super::CookieLookup;

/// [`CookieLookup`] over the reqwest cookie [`Jar`] the default client also
/// writes to, so lookups reflect every cookie the process has received.
#[derive(Clone)]
pub struct JarCookies {
    jar: Arc<Jar>,
}

impl JarCookies {
    pub fn new(jar: Arc<Jar>) -> Self {
        Self { jar }
    }
}

impl CookieLookup for JarCookies {
    fn cookies_for(&self, host: &str) -> HashMap<String, String> {
        // The jar is keyed by URL; reconstruct one from the bare host.
        let Ok(url) = Url::parse(&format!("https://{}/", host)) else {
            return HashMap::new();
        };
        let Some(value) = self.jar.cookies(&url) else {
            return HashMap::new();
        };
        let Ok(value) = value.to_str() else {
            return HashMap::new();
        };

        value
            .split("; ")
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}
