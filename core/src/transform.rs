/*
 * transform.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Airhook, a deep link rewriter for mail clients.
 *
 * Airhook is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Airhook is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Airhook.  If not, see <http://www.gnu.org/licenses/>.
 */

//! The link rewrite itself: airmail://...?messageid=<id> to a destination URL for
//! the selected target application. Pure function, no I/O, no global state; callers
//! resolve the target scheme (e.g. from the preference file) and pass it in.
//!
//! Checks run in a fixed order with early exit, so a link that violates several
//! conditions always reports the earliest one: scheme gate, then query presence,
//! then messageid lookup, then emptiness, then destination validity.

use std::fmt;

use url::Url;

use crate::error::TransformError;
use crate::message_id::MessageId;
use crate::query;
use crate::scheme::TargetScheme;
use crate::uri::{apple_mail_message_uri, hook_email_uri};

/// Source scheme accepted for rewriting (matched case-insensitively).
pub const AIRMAIL_SCHEME: &str = "airmail";

/// Query parameter carrying the message id (matched case-sensitively).
pub const MESSAGE_ID_PARAM: &str = "messageid";

/// A rewritten link, guaranteed to parse as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLink(Url);

impl DestinationLink {
    /// Full URL string, id byte-for-byte as it appeared in the source link.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Host component, empty when the URL has none.
    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or("")
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }

    pub fn into_url(self) -> Url {
        self.0
    }
}

impl fmt::Display for DestinationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rewrite an airmail deep link into a destination URL for `scheme`.
pub fn transform(link: &str, scheme: TargetScheme) -> Result<DestinationLink, TransformError> {
    let id = extract_message_id(link)?;
    let candidate = match scheme {
        TargetScheme::Hookmark => hook_email_uri(&id),
        TargetScheme::AppleMail => apple_mail_message_uri(&id),
    };
    parse_destination(&candidate)
}

/// Pull the raw message id out of an airmail deep link. This is the validating
/// front half of [`transform`]; front ends can call it on its own for diagnostics.
pub fn extract_message_id(link: &str) -> Result<MessageId, TransformError> {
    // A string that does not parse at all has no airmail scheme to accept.
    let url = Url::parse(link).map_err(|_| TransformError::InvalidScheme)?;
    if !url.scheme().eq_ignore_ascii_case(AIRMAIL_SCHEME) {
        return Err(TransformError::InvalidScheme);
    }
    let raw_query = url.query().ok_or(TransformError::MissingMessageId)?;
    match query::first_raw_value(raw_query, MESSAGE_ID_PARAM) {
        None => Err(TransformError::MissingMessageId),
        Some(None) | Some(Some("")) => Err(TransformError::EmptyMessageId),
        Some(Some(value)) => Ok(MessageId::new(value)),
    }
}

/// Final syntactic gate on a constructed destination string.
fn parse_destination(candidate: &str) -> Result<DestinationLink, TransformError> {
    Url::parse(candidate)
        .map(DestinationLink)
        .map_err(|_| TransformError::InvalidUrlConstruction {
            attempted: candidate.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_gate_runs_first() {
        // missing query too, but the scheme failure must win
        let err = transform("https://example.com", TargetScheme::Hookmark).unwrap_err();
        assert_eq!(err, TransformError::InvalidScheme);
    }

    #[test]
    fn unparseable_link_is_invalid_scheme() {
        let err = extract_message_id("not a link at all").unwrap_err();
        assert_eq!(err, TransformError::InvalidScheme);
    }

    #[test]
    fn messageid_without_equals_is_empty() {
        let err = extract_message_id("airmail://message?messageid").unwrap_err();
        assert_eq!(err, TransformError::EmptyMessageId);
    }

    #[test]
    fn parse_destination_rejects_non_url() {
        let err = parse_destination("://no-scheme").unwrap_err();
        assert!(matches!(err, TransformError::InvalidUrlConstruction { ref attempted } if attempted == "://no-scheme"));
    }

    #[test]
    fn destination_components() {
        let link = transform("airmail://message?messageid=TEST", TargetScheme::Hookmark).unwrap();
        assert_eq!(link.scheme(), "hook");
        assert_eq!(link.host(), "email");
        assert_eq!(link.path(), "/TEST");
    }
}
