/*
 * error.rs
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

//! Link rewrite errors. Closed set; every failure is an input condition, none is retryable.
//! The core reports only the structured kind. Alert/dialog text belongs to each front end.

use std::fmt;

/// Reason a link could not be rewritten. Exactly one kind per failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Source scheme is not airmail (checked before anything else).
    InvalidScheme,
    /// No query string, or no messageid parameter in it.
    MissingMessageId,
    /// messageid parameter present but without a value.
    EmptyMessageId,
    /// The constructed destination did not parse as a URL. Carries the attempted
    /// string so front ends can show it alongside the original link.
    InvalidUrlConstruction {
        attempted: String,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidScheme => write!(f, "not an airmail link"),
            TransformError::MissingMessageId => write!(f, "link has no messageid parameter"),
            TransformError::EmptyMessageId => write!(f, "messageid parameter is empty"),
            TransformError::InvalidUrlConstruction { attempted } => {
                write!(f, "constructed URL is not valid: {}", attempted)
            }
        }
    }
}

impl std::error::Error for TransformError {}
