/*
 * lib.rs
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

//! Core for Airhook: rewrites airmail:// message deep links into equivalent Hookmark
//! (hook://email/...) or Apple Mail (message://...) URLs so saved links keep working
//! after a switch of mail client. The rewrite itself is a pure function with no I/O;
//! preference storage and the platform URL-open handlers live behind the FFI crate.

pub mod config;
pub mod error;
pub mod message_id;
pub mod query;
pub mod scheme;
pub mod transform;
pub mod uri;

pub use error::TransformError;
pub use message_id::MessageId;
pub use scheme::TargetScheme;
pub use transform::{extract_message_id, transform, DestinationLink};
