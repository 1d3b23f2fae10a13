//! Store URI composition.
//!
//! Store URIs look like `{event}.{domain}/{language}/{edition}/{channel}`
//! with an optional `?preview_token=` suffix. Every part is optional.

use crate::types::{Channel, Edition};

/// Explicit parts of a store URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriSegments {
    /// Store domain, used together with `event` as the host.
    pub domain: Option<String>,
    /// Event code, used together with `domain` as the host.
    pub event: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Edition URI segment.
    pub edition: Option<String>,
    /// Channel URI segment.
    pub channel: Option<String>,
    /// Preview token for editions that are not public yet.
    pub preview_token: Option<String>,
}

impl UriSegments {
    /// Creates an empty segment set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host from a domain and an event code.
    #[must_use]
    pub fn with_host(mut self, domain: impl Into<String>, event: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self.event = Some(event.into());
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the edition.
    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    /// Sets the channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Sets the preview token.
    #[must_use]
    pub fn with_preview_token(mut self, token: impl Into<String>) -> Self {
        self.preview_token = Some(token.into());
        self
    }

    /// Returns true if no part is set at all.
    ///
    /// A part set to an empty string still counts as set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.event.is_none()
            && self.language.is_none()
            && self.edition.is_none()
            && self.channel.is_none()
            && self.preview_token.is_none()
    }

    /// Composes the URI from the explicit parts.
    #[must_use]
    pub fn to_uri(&self) -> String {
        let mut link = String::new();

        if let (Some(domain), Some(event)) = (filled(&self.domain), filled(&self.event)) {
            link.push_str(event);
            link.push('.');
            link.push_str(domain);
        }

        for part in [&self.language, &self.edition, &self.channel] {
            if let Some(value) = filled(part) {
                link.push('/');
                link.push_str(value);
            }
        }

        push_preview_token(&mut link, filled(&self.preview_token));
        trim_leading_slashes(link)
    }
}

/// Composes the URI from the session's loaded edition and channel.
pub(crate) fn state_uri(
    edition: Option<&Edition>,
    channel: Option<&Channel>,
    preview_token: Option<&str>,
) -> String {
    let mut link = String::new();

    if let Some(edition) = edition {
        link.push('/');
        link.push_str(edition.uri.as_deref().unwrap_or_default());
    }

    if let Some(channel) = channel {
        link.push('/');
        link.push_str(channel.uri.as_deref().unwrap_or_default());
    }

    push_preview_token(&mut link, preview_token.filter(|t| !t.is_empty()));
    trim_leading_slashes(link)
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_preview_token(link: &mut String, token: Option<&str>) {
    if let Some(token) = token {
        link.push_str("?preview_token=");
        link.push_str(token);
    }
}

fn trim_leading_slashes(link: String) -> String {
    link.trim_start_matches('/').to_string()
}
