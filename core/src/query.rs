/*
 * query.rs
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

//! Raw query string scanning. Names and values are slices of the query exactly as
//! received: order preserved, duplicates allowed, percent-encoding untouched.
//! No decoding happens here; names match byte for byte (case-sensitive).

/// Split a raw query string into (name, value) pairs. A segment without `=` yields
/// a pair with no value; empty segments (as in `a=1&&b=2`) are skipped.
pub fn raw_query_pairs(query: &str) -> Vec<(&str, Option<&str>)> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (segment, None),
        })
        .collect()
}

/// Value of the first pair named `name` (byte-exact match). Outer None: no such
/// pair. Inner None: the pair is present but has no `=`. Later duplicates are
/// ignored by construction.
pub fn first_raw_value<'a>(query: &'a str, name: &str) -> Option<Option<&'a str>> {
    raw_query_pairs(query)
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_preserve_order_and_duplicates() {
        let pairs = raw_query_pairs("a=1&b=2&a=3");
        assert_eq!(pairs, vec![("a", Some("1")), ("b", Some("2")), ("a", Some("3"))]);
    }

    #[test]
    fn pair_without_equals_has_no_value() {
        let pairs = raw_query_pairs("flag&a=1");
        assert_eq!(pairs, vec![("flag", None), ("a", Some("1"))]);
    }

    #[test]
    fn empty_segments_skipped() {
        assert_eq!(raw_query_pairs(""), vec![]);
        assert_eq!(raw_query_pairs("&&"), vec![]);
        assert_eq!(raw_query_pairs("a=1&&b=2"), vec![("a", Some("1")), ("b", Some("2"))]);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(first_raw_value("id=FIRST&id=SECOND", "id"), Some(Some("FIRST")));
        assert_eq!(first_raw_value("other=x", "id"), None);
        assert_eq!(first_raw_value("id", "id"), Some(None));
        assert_eq!(first_raw_value("id=", "id"), Some(Some("")));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        assert_eq!(first_raw_value("ID=upper", "id"), None);
    }

    #[test]
    fn values_stay_percent_encoded() {
        let pairs = raw_query_pairs("mail=joe%40user.com&messageid=AAMk%2BX%3D%3D");
        assert_eq!(pairs[0], ("mail", Some("joe%40user.com")));
        assert_eq!(pairs[1], ("messageid", Some("AAMk%2BX%3D%3D")));
    }
}
