/*
 * uri.rs
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

//! Destination URL templates, one per target application. The message id is spliced
//! in as-is (raw percent-encoded form); these templates never encode or decode it.

use crate::message_id::MessageId;

/// Hookmark email URL: hook://email/<id>.
pub fn hook_email_uri(id: &MessageId) -> String {
    format!("hook://email/{}", id)
}

/// Apple Mail message URL: message://%3C<id>%3E. Apple Mail expects the id wrapped
/// in angle brackets, percent-encoded; no unencoded brackets are emitted.
pub fn apple_mail_message_uri(id: &MessageId) -> String {
    format!("message://%3C{}%3E", id)
}
