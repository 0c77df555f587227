//! Minimal unique stems for shortened filenames.
//!
//! When flattening renames a submitted file to a student-derived stem, the
//! stem must stay unique across the batch: `Smith.py` is only safe if no other
//! surname in the batch starts with `Smith`. For each group of identifiers
//! differing only by occurrence suffix, the stem starts at the surname and
//! widens one character at a time until no other same-surname group shares it.

use std::collections::{BTreeMap, HashMap};

use crate::naming::identifier::{decode_name, SEP};

/// Compute the short filename stem for every identifier in the batch.
///
/// Identifiers sharing a base (same last name and first-name stem) share one
/// prefix search; occurrence digits are appended per member. Separator
/// characters are stripped and space markers decoded before the stem is
/// handed out, since it is used verbatim as a filename.
pub fn compute_short_stems(identifiers: &[String]) -> HashMap<String, String> {
    // Group members differing only by occurrence suffix under one base.
    let mut groups: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for id in identifiers {
        let base_len = id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let (base, digits) = id.split_at(base_len);
        groups.entry(base).or_default().push((id, digits));
    }

    let bases: Vec<&str> = groups.keys().copied().collect();

    let mut stems = HashMap::new();
    for (base, members) in &groups {
        let surname_len = match base.find(SEP) {
            Some(i) => i,
            None => continue, // not in identifier form
        };
        let surname = &base[..surname_len];

        // Widen from the surname boundary until no sibling group with the
        // same surname shares the candidate, capped at our own full length.
        let mut end = surname_len;
        loop {
            let candidate = &base[..end];
            let collides = bases.iter().any(|other| {
                *other != *base
                    && other[..other.find(SEP).unwrap_or(other.len())] == *surname
                    && other.starts_with(candidate)
            });
            if !collides || end >= base.len() {
                break;
            }
            end += base[end..].chars().next().map_or(1, char::len_utf8);
        }

        let stem = decode_name(&base[..end].replace(SEP, ""));
        for (id, digits) in members {
            stems.insert((*id).to_string(), format!("{}{}", stem, digits));
        }
    }

    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_distinct_surnames_keep_bare_surname() {
        let stems = compute_short_stems(&ids(&["Smith__Alice", "Jones__Alice"]));
        assert_eq!(stems["Smith__Alice"], "Smith");
        assert_eq!(stems["Jones__Alice"], "Jones");
    }

    #[test]
    fn test_surname_prefix_of_another_surname() {
        // Smith and Smithson are different surname groups, so each keeps its
        // own surname; the occurrence member extends its group's stem.
        let stems =
            compute_short_stems(&ids(&["Smith__Bob", "Smith__Bob1", "Smithson__Carl"]));
        assert_eq!(stems["Smith__Bob"], "Smith");
        assert_eq!(stems["Smith__Bob1"], "Smith1");
        assert_eq!(stems["Smithson__Carl"], "Smithson");
    }

    #[test]
    fn test_shared_surname_widens_into_first_name() {
        let stems = compute_short_stems(&ids(&["Smith__Bob", "Smith__Carl"]));
        assert_eq!(stems["Smith__Bob"], "SmithB");
        assert_eq!(stems["Smith__Carl"], "SmithC");
    }

    #[test]
    fn test_first_name_prefix_of_sibling() {
        let stems = compute_short_stems(&ids(&["Smith__Bob", "Smith__Bobby"]));
        assert_eq!(stems["Smith__Bob"], "SmithBob");
        assert_eq!(stems["Smith__Bobby"], "SmithBobb");
    }

    #[test]
    fn test_occurrence_members_share_group_stem() {
        let stems = compute_short_stems(&ids(&["Evans__Bob", "Evans__Bob1", "Evans__Carl"]));
        assert_eq!(stems["Evans__Bob"], "EvansB");
        assert_eq!(stems["Evans__Bob1"], "EvansB1");
        assert_eq!(stems["Evans__Carl"], "EvansC");
    }

    #[test]
    fn test_marker_decoded_in_stem() {
        let stems = compute_short_stems(&ids(&["Q~Public__John"]));
        assert_eq!(stems["Q~Public__John"], "Q Public");
    }

    #[test]
    fn test_all_stems_unique() {
        let batch = ids(&[
            "Smith__Alice",
            "Smith__Bob",
            "Smith__Bob1",
            "Smithson__Carl",
            "Jones__Alice",
            "Evans__Bob",
        ]);
        let stems = compute_short_stems(&batch);
        assert_eq!(stems.len(), batch.len());
        let mut values: Vec<&String> = stems.values().collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), batch.len());
    }
}
