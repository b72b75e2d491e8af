/*
 * message_id.rs
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

//! Opaque message id carried in a mail deep link. Held in its raw percent-encoded
//! form exactly as it appeared in the source query string; the rewrite never decodes
//! or re-encodes it, so Base64-derived Exchange ids (%2B, %3D, %40 sequences)
//! survive byte for byte.

use std::fmt;

use percent_encoding::percent_decode_str;

/// Raw message id from a deep link query. Opaque, application-specific.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id exactly as received, percent-encoding intact.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-decoded form for display or diagnostics. The rewrite always
    /// splices in the raw form, never this one.
    pub fn decoded(&self) -> String {
        percent_decode_str(&self.0).decode_utf8_lossy().into_owned()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_form_is_verbatim() {
        let id = MessageId::new("AAMk%2BXYZ%3D%3D");
        assert_eq!(id.as_str(), "AAMk%2BXYZ%3D%3D");
        assert_eq!(id.to_string(), "AAMk%2BXYZ%3D%3D");
    }

    #[test]
    fn decoded_form_for_display() {
        let id = MessageId::new("user%40domain%2Fpath%3Dvalue%2B1");
        assert_eq!(id.decoded(), "user@domain/path=value+1");
        // raw form untouched by decoding
        assert_eq!(id.as_str(), "user%40domain%2Fpath%3Dvalue%2B1");
    }
}
