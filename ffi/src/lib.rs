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

//! C FFI for the Airhook core. Platform front ends (macOS menu bar app, iOS app)
//! call airhook_transform from their URL-open handlers and the scheme accessors
//! from their settings UI. Returned strings are newly allocated; free with
//! airhook_free_string (lists with airhook_free_string_list). All string
//! parameters are UTF-8 NUL-terminated. Failures are negative codes; the core
//! exports no alert text, each front end owns its own message templates.

use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::path::PathBuf;
use std::ptr;
use std::sync::Mutex;

use airhook_core::config::{default_config_path, load_selected_scheme, save_selected_scheme};
use airhook_core::{transform, TargetScheme, TransformError};

/// Rewrite succeeded.
pub const AIRHOOK_OK: c_int = 0;
/// Source link scheme is not airmail.
pub const AIRHOOK_ERR_INVALID_SCHEME: c_int = -1;
/// Source link has no query string or no messageid parameter.
pub const AIRHOOK_ERR_MISSING_MESSAGE_ID: c_int = -2;
/// messageid parameter is present but has no value.
pub const AIRHOOK_ERR_EMPTY_MESSAGE_ID: c_int = -3;
/// Constructed destination did not parse as a URL.
pub const AIRHOOK_ERR_INVALID_URL_CONSTRUCTION: c_int = -4;
/// An argument was NULL, not UTF-8, or named an unknown scheme.
pub const AIRHOOK_ERR_BAD_ARGUMENT: c_int = -5;
/// Preference file could not be read or written.
pub const AIRHOOK_ERR_CONFIG: c_int = -6;

/// Process-wide config path override (containers, tests). None means the default
/// ~/.airhook/config.xml.
static CONFIG_PATH: once_cell::sync::OnceCell<Mutex<Option<PathBuf>>> =
    once_cell::sync::OnceCell::new();

fn config_path_slot() -> &'static Mutex<Option<PathBuf>> {
    CONFIG_PATH.get_or_init(|| Mutex::new(None))
}

fn config_path() -> Option<PathBuf> {
    if let Ok(guard) = config_path_slot().lock() {
        if let Some(p) = guard.as_ref() {
            return Some(p.clone());
        }
    }
    default_config_path()
}

fn ptr_to_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string()) }
}

fn error_code(error: &TransformError) -> c_int {
    match error {
        TransformError::InvalidScheme => AIRHOOK_ERR_INVALID_SCHEME,
        TransformError::MissingMessageId => AIRHOOK_ERR_MISSING_MESSAGE_ID,
        TransformError::EmptyMessageId => AIRHOOK_ERR_EMPTY_MESSAGE_ID,
        TransformError::InvalidUrlConstruction { .. } => AIRHOOK_ERR_INVALID_URL_CONSTRUCTION,
    }
}

/// Rewrite a deep link. scheme: stable identifier ("hook", "message"), or NULL for
/// the built-in default (Hookmark). On AIRHOOK_OK writes a newly allocated URL
/// string to out_url (caller frees with airhook_free_string).
#[no_mangle]
pub unsafe extern "C" fn airhook_transform(
    link: *const c_char,
    scheme: *const c_char,
    out_url: *mut *mut c_char,
) -> c_int {
    let link_str = match ptr_to_str(link) {
        Some(s) => s,
        None => return AIRHOOK_ERR_BAD_ARGUMENT,
    };
    let target = if scheme.is_null() {
        TargetScheme::default()
    } else {
        match ptr_to_str(scheme).as_deref().and_then(TargetScheme::from_raw) {
            Some(t) => t,
            None => return AIRHOOK_ERR_BAD_ARGUMENT,
        }
    };
    match transform(&link_str, target) {
        Ok(dest) => {
            if !out_url.is_null() {
                let c = CString::new(dest.as_str()).unwrap_or_else(|_| CString::new("").unwrap());
                *out_url = c.into_raw();
            }
            AIRHOOK_OK
        }
        Err(e) => error_code(&e),
    }
}

/// Currently selected scheme's stable identifier, newly allocated (caller frees with
/// airhook_free_string). Unset or unreadable preference yields the default.
#[no_mangle]
pub unsafe extern "C" fn airhook_selected_scheme() -> *mut c_char {
    let scheme = config_path()
        .and_then(|p| load_selected_scheme(&p).ok())
        .unwrap_or_default();
    CString::new(scheme.as_str()).unwrap().into_raw()
}

/// Persist the selected scheme (stable identifier). Returns AIRHOOK_OK,
/// AIRHOOK_ERR_BAD_ARGUMENT for an unknown identifier, or AIRHOOK_ERR_CONFIG if
/// the preference file cannot be written.
#[no_mangle]
pub unsafe extern "C" fn airhook_set_selected_scheme(scheme: *const c_char) -> c_int {
    let target = match ptr_to_str(scheme).as_deref().and_then(TargetScheme::from_raw) {
        Some(t) => t,
        None => return AIRHOOK_ERR_BAD_ARGUMENT,
    };
    let path = match config_path() {
        Some(p) => p,
        None => return AIRHOOK_ERR_CONFIG,
    };
    match save_selected_scheme(&path, target) {
        Ok(()) => AIRHOOK_OK,
        Err(_) => AIRHOOK_ERR_CONFIG,
    }
}

/// NULL-terminated list of all selectable scheme identifiers, in settings display
/// order. Caller frees with airhook_free_string_list.
#[no_mangle]
pub unsafe extern "C" fn airhook_available_schemes() -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = TargetScheme::ALL
        .iter()
        .map(|s| CString::new(s.as_str()).unwrap().into_raw())
        .collect();
    ptrs.push(ptr::null_mut());
    Box::into_raw(ptrs.into_boxed_slice()) as *mut *mut c_char
}

/// Human-readable name for a scheme identifier, newly allocated (caller frees with
/// airhook_free_string). NULL for an unknown identifier.
#[no_mangle]
pub unsafe extern "C" fn airhook_scheme_display_name(scheme: *const c_char) -> *mut c_char {
    match ptr_to_str(scheme).as_deref().and_then(TargetScheme::from_raw) {
        Some(t) => CString::new(t.display_name()).unwrap().into_raw(),
        None => ptr::null_mut(),
    }
}

/// Override the preference file location (sandboxed containers, tests). NULL resets
/// to the default ~/.airhook/config.xml.
#[no_mangle]
pub unsafe extern "C" fn airhook_set_config_path(path: *const c_char) {
    let new_path = ptr_to_str(path).map(PathBuf::from);
    if let Ok(mut guard) = config_path_slot().lock() {
        *guard = new_path;
    }
}

/// Free a string returned by this library. No-op on NULL.
#[no_mangle]
pub unsafe extern "C" fn airhook_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Free a NULL-terminated string list returned by this library. No-op on NULL.
#[no_mangle]
pub unsafe extern "C" fn airhook_free_string_list(ptr: *mut *mut c_char) {
    if ptr.is_null() {
        return;
    }
    let mut len = 0;
    loop {
        let p = *ptr.add(len);
        if p.is_null() {
            break;
        }
        let _ = CString::from_raw(p);
        len += 1;
    }
    let _ = Box::from_raw(std::slice::from_raw_parts_mut(ptr, len + 1) as *mut [*mut c_char]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_ok(link: &str, scheme: Option<&str>) -> String {
        let link_c = CString::new(link).unwrap();
        let scheme_c = scheme.map(|s| CString::new(s).unwrap());
        let mut out: *mut c_char = ptr::null_mut();
        let code = unsafe {
            airhook_transform(
                link_c.as_ptr(),
                scheme_c.as_ref().map_or(ptr::null(), |c| c.as_ptr()),
                &mut out,
            )
        };
        assert_eq!(code, AIRHOOK_OK);
        let url = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        unsafe { airhook_free_string(out) };
        url
    }

    fn transform_err(link: &str, scheme: Option<&str>) -> c_int {
        let link_c = CString::new(link).unwrap();
        let scheme_c = scheme.map(|s| CString::new(s).unwrap());
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            airhook_transform(
                link_c.as_ptr(),
                scheme_c.as_ref().map_or(ptr::null(), |c| c.as_ptr()),
                &mut out,
            )
        }
    }

    #[test]
    fn transform_default_scheme() {
        assert_eq!(transform_ok("airmail://message?messageid=ABC123", None), "hook://email/ABC123");
    }

    #[test]
    fn transform_explicit_schemes() {
        assert_eq!(
            transform_ok("airmail://message?messageid=ABC123", Some("hook")),
            "hook://email/ABC123"
        );
        assert_eq!(
            transform_ok("airmail://message?messageid=ABC123", Some("message")),
            "message://%3CABC123%3E"
        );
    }

    #[test]
    fn transform_error_codes() {
        assert_eq!(
            transform_err("https://example.com?messageid=X", None),
            AIRHOOK_ERR_INVALID_SCHEME
        );
        assert_eq!(
            transform_err("airmail://message?mail=a%40b.com", None),
            AIRHOOK_ERR_MISSING_MESSAGE_ID
        );
        assert_eq!(
            transform_err("airmail://message?messageid=", None),
            AIRHOOK_ERR_EMPTY_MESSAGE_ID
        );
        assert_eq!(
            transform_err("airmail://message?messageid=X", Some("gopher")),
            AIRHOOK_ERR_BAD_ARGUMENT
        );
        let code = unsafe { airhook_transform(ptr::null(), ptr::null(), ptr::null_mut()) };
        assert_eq!(code, AIRHOOK_ERR_BAD_ARGUMENT);
    }

    #[test]
    fn scheme_preference_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.xml");
        let path_c = CString::new(path.to_str().unwrap()).unwrap();
        unsafe { airhook_set_config_path(path_c.as_ptr()) };

        // unset preference yields the default
        let raw = unsafe { airhook_selected_scheme() };
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "hook");
        unsafe { airhook_free_string(raw) };

        let message_c = CString::new("message").unwrap();
        assert_eq!(unsafe { airhook_set_selected_scheme(message_c.as_ptr()) }, AIRHOOK_OK);
        let raw = unsafe { airhook_selected_scheme() };
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "message");
        unsafe { airhook_free_string(raw) };

        let bogus_c = CString::new("gopher").unwrap();
        assert_eq!(
            unsafe { airhook_set_selected_scheme(bogus_c.as_ptr()) },
            AIRHOOK_ERR_BAD_ARGUMENT
        );

        unsafe { airhook_set_config_path(ptr::null()) };
    }

    #[test]
    fn scheme_listing_and_display_names() {
        let list = unsafe { airhook_available_schemes() };
        let first = unsafe { CStr::from_ptr(*list) }.to_str().unwrap();
        let second = unsafe { CStr::from_ptr(*list.add(1)) }.to_str().unwrap();
        assert_eq!(first, "hook");
        assert_eq!(second, "message");
        assert!(unsafe { *list.add(2) }.is_null());
        unsafe { airhook_free_string_list(list) };

        let hook_c = CString::new("hook").unwrap();
        let name = unsafe { airhook_scheme_display_name(hook_c.as_ptr()) };
        assert_eq!(
            unsafe { CStr::from_ptr(name) }.to_str().unwrap(),
            "Hookmark (hook://email/...)"
        );
        unsafe { airhook_free_string(name) };

        let bogus_c = CString::new("gopher").unwrap();
        assert!(unsafe { airhook_scheme_display_name(bogus_c.as_ptr()) }.is_null());
    }
}
