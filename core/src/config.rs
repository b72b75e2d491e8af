/*
 * config.rs
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

//! Selected-scheme preference: load/save ~/.airhook/config.xml so every front end
//! (menu bar app, iOS app) resolves the same value before calling the rewrite.
//! All XML read/write uses the quick_xml parser/writer; no regex or hand parsing.
//! The rewrite itself never touches this module; callers read the preference once
//! per invocation and pass it in.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::scheme::TargetScheme;

/// Default config directory: ~/.airhook.
pub fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from).map(|h| h.join(".airhook"))
}

/// Default config path: ~/.airhook/config.xml.
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join("config.xml"))
}

/// Load the selected scheme. A missing file or an unrecognized stored value falls
/// back to the default (Hookmark), the behavior front ends expect from an unset
/// preference. Only an unreadable or malformed file is an error.
pub fn load_selected_scheme(path: &Path) -> Result<TargetScheme, String> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TargetScheme::default()),
        Err(e) => return Err(e.to_string()),
    };
    let raw = read_scheme_xml(&content)?;
    Ok(raw.as_deref().and_then(TargetScheme::from_raw).unwrap_or_default())
}

/// Parse config XML. Expects <airhook><scheme>hook</scheme></airhook>; returns the
/// text of the first <scheme> element, if any.
fn read_scheme_xml(content: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut in_scheme = false;
    let mut value: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Err(e) => return Err(format!("XML parse error: {}", e)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"scheme" {
                    in_scheme = true;
                }
            }
            Ok(Event::Text(e)) => {
                if in_scheme && value.is_none() {
                    let text = e.unescape().map_err(|e| e.to_string())?.trim().to_string();
                    value = Some(text);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"scheme" {
                    in_scheme = false;
                }
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(value)
}

/// Save the selected scheme, creating the config directory if needed.
pub fn save_selected_scheme(path: &Path, scheme: TargetScheme) -> Result<(), String> {
    let parent = path.parent().ok_or("no parent dir")?;
    fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    let xml = scheme_xml_to_bytes(scheme)?;
    fs::write(path, xml).map_err(|e| e.to_string())?;
    Ok(())
}

/// Build config XML into a byte vector (UTF-8).
fn scheme_xml_to_bytes(scheme: TargetScheme) -> Result<Vec<u8>, String> {
    let mut out = Vec::new();
    let mut writer = Writer::new(&mut out);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| e.to_string())?;
    writer
        .write_event(Event::Start(BytesStart::new("airhook")))
        .map_err(|e| e.to_string())?;
    writer
        .write_event(Event::Start(BytesStart::new("scheme")))
        .map_err(|e| e.to_string())?;
    writer
        .write_event(Event::Text(BytesText::new(scheme.as_str())))
        .map_err(|e| e.to_string())?;
    writer
        .write_event(Event::End(BytesEnd::new("scheme")))
        .map_err(|e| e.to_string())?;
    writer
        .write_event(Event::End(BytesEnd::new("airhook")))
        .map_err(|e| e.to_string())?;
    Ok(out)
}
