//! Share links into a contacts service
//!
//! A share link points at the service's "new contact" endpoint and carries
//! every field as its own query parameter. Values are encoded independently
//! with the URI component set, so `&`, `=`, `?`, `#` or non-ASCII text in a
//! field can never break the query structure.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CardError, CardResult};
use crate::types::ContactRecord;

/// Default "new contact" endpoint
pub const DEFAULT_ENDPOINT: &str = "https://contacts.google.com/new";

/// Characters left unescaped by URI component encoding:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode one value as a URI component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Validated share endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShareEndpoint(String);

impl ShareEndpoint {
    /// Parse an endpoint. It must be an absolute http(s) URL without a
    /// query or fragment.
    pub fn parse(s: &str) -> CardResult<Self> {
        // Url::parse silently drops these, so the stored spelling must not carry them.
        let s = s.trim_matches(|c: char| c <= ' ');
        if s.chars().any(|c| c.is_ascii_control()) {
            return Err(CardError::InvalidEndpoint(format!(
                "{:?}: control characters are not allowed",
                s
            )));
        }
        let url = Url::parse(s).map_err(|e| CardError::InvalidEndpoint(format!("{}: {}", s, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CardError::InvalidEndpoint(format!(
                "{}: unsupported scheme {}",
                s,
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(CardError::InvalidEndpoint(format!(
                "{}: query and fragment are not allowed",
                s
            )));
        }
        // Keep the caller's spelling; Url would append a trailing slash to bare hosts.
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ShareEndpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl TryFrom<String> for ShareEndpoint {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShareEndpoint> for String {
    fn from(endpoint: ShareEndpoint) -> Self {
        endpoint.0
    }
}

impl std::fmt::Display for ShareEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deep link that pre-populates the service's "create contact" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink(String);

impl ShareLink {
    /// Build the link. All nine parameters are always present, in fixed
    /// order, empty when the field is empty.
    pub fn build(endpoint: &ShareEndpoint, record: &ContactRecord) -> Self {
        let query = record
            .fields()
            .filter_map(|(field, value)| {
                field
                    .share_param()
                    .map(|param| format!("{}={}", param, encode_component(value)))
            })
            .collect::<Vec<_>>()
            .join("&");
        Self(format!("{}?{}", endpoint.as_str(), query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decoded query parameters, in order
    pub fn params(&self) -> CardResult<Vec<(String, String)>> {
        let Some((_, query)) = self.0.split_once('?') else {
            return Ok(Vec::new());
        };
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                Ok((decode_component(key)?, decode_component(value)?))
            })
            .collect()
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn decode_component(s: &str) -> CardResult<String> {
    percent_decode_str(s)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|e| CardError::InvalidEndpoint(format!("undecodable query component: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactForm, FieldId};

    fn link_for(form: &ContactForm) -> ShareLink {
        ShareLink::build(&ShareEndpoint::default(), &ContactRecord::capture(form))
    }

    #[test]
    fn test_empty_form_has_all_params() {
        let link = link_for(&ContactForm::new());
        assert_eq!(
            link.as_str(),
            "https://contacts.google.com/new?name=&company=&job_title=&email=&phone=&address=&birthday=&website=&notes="
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let form = ContactForm::new().with(FieldId::Name, "A&B=C");
        let link = link_for(&form);
        assert!(link.as_str().contains("name=A%26B%3DC&company="));
        assert_eq!(link.as_str().matches('&').count(), 8);

        let params = link.params().unwrap();
        assert_eq!(params.len(), 9);
        assert_eq!(params[0], ("name".to_string(), "A&B=C".to_string()));
    }

    #[test]
    fn test_matches_uri_component_encoding() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("?#/+:@"), "%3F%23%2F%2B%3A%40");
        assert_eq!(encode_component("Zoë"), "Zo%C3%AB");
    }

    #[test]
    fn test_url_crate_agrees() {
        let form = ContactForm::new()
            .with(FieldId::Title, "R&D ?lead #1")
            .with(FieldId::Notes, "line one\nline two");
        let link = link_for(&form);
        let url = Url::parse(link.as_str()).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs[2], ("job_title".to_string(), "R&D ?lead #1".to_string()));
        assert_eq!(pairs[8], ("notes".to_string(), "line one\nline two".to_string()));
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(ShareEndpoint::parse("https://contacts.example.com/new").is_ok());
        assert!(ShareEndpoint::parse("contacts.example.com/new").is_err());
        assert!(ShareEndpoint::parse("ftp://example.com/new").is_err());
        assert!(ShareEndpoint::parse("https://example.com/new?x=1").is_err());
        assert!(ShareEndpoint::parse("https://example.com/new#top").is_err());
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let endpoint = ShareEndpoint::parse("  https://contacts.example.com/new\n").unwrap();
        assert_eq!(endpoint.as_str(), "https://contacts.example.com/new");

        let link = ShareLink::build(&endpoint, &ContactRecord::capture(&ContactForm::new()));
        assert!(link.as_str().starts_with("https://contacts.example.com/new?name=&"));
    }

    #[test]
    fn test_endpoint_rejects_embedded_control_characters() {
        assert!(ShareEndpoint::parse("https://contacts.example.com/n\tew").is_err());
        assert!(ShareEndpoint::parse("https://contacts.example.com/\nnew").is_err());
    }

    #[test]
    fn test_custom_endpoint() {
        let endpoint = ShareEndpoint::parse("http://localhost:8080/add").unwrap();
        let link = ShareLink::build(&endpoint, &ContactRecord::capture(&ContactForm::new()));
        assert!(link.as_str().starts_with("http://localhost:8080/add?name=&"));
    }
}
