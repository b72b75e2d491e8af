/*
 * scheme.rs
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

//! Target scheme discriminants for rewritten mail links. Used by UI and FFI.

use std::fmt;

/// Application a rewritten link should open in. Each variant has its own
/// destination URL template in `uri`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TargetScheme {
    Hookmark = 0,
    AppleMail = 1,
}

impl TargetScheme {
    /// All selectable schemes, in settings display order.
    pub const ALL: [TargetScheme; 2] = [TargetScheme::Hookmark, TargetScheme::AppleMail];

    /// Stable identifier used in the config file and over FFI.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetScheme::Hookmark => "hook",
            TargetScheme::AppleMail => "message",
        }
    }

    /// Parse a stable identifier. None for anything unrecognized.
    pub fn from_raw(raw: &str) -> Option<TargetScheme> {
        match raw {
            "hook" => Some(TargetScheme::Hookmark),
            "message" => Some(TargetScheme::AppleMail),
            _ => None,
        }
    }

    /// Human-readable name for settings UI.
    pub fn display_name(self) -> &'static str {
        match self {
            TargetScheme::Hookmark => "Hookmark (hook://email/...)",
            TargetScheme::AppleMail => "Apple Mail (message://...)",
        }
    }
}

impl Default for TargetScheme {
    fn default() -> Self {
        TargetScheme::Hookmark
    }
}

impl fmt::Display for TargetScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
