//! # Target lookup in local catalogs
//!
//! When a name cannot be resolved by an online service, the planner falls back to the catalogs
//! loaded by the caller. A target name is first classified by [`CatalogQuery::from_name`]:
//!
//! | Input | Catalog | Searched for | Mode |
//! |-------|---------|--------------|------|
//! | `M31`, `Messier 31` | Messier | `M 31` | designation |
//! | `NGC7000` | NGC | `NGC 7000` | designation |
//! | `IC 1396` | IC | `IC 1396` | designation |
//! | `RCW 49` | RCW | `RCW 49` | designation |
//! | `Sh2-129` | Sharpless | `SH2-129` | designation |
//! | `Gum 12`, `G12` | RCW | `G12` | exact, anywhere in the entry |
//! | `B33`, `Barnard 33` | Barnard | `B 33` | designation |
//! | `Ced 214`, `Cederblad 214` | Cederblad | `Ced 214` | designation |
//! | anything else | all | the name as typed | fuzzy |
//!
//! Designation and exact matches reject a hit followed by another digit, so `G1` never matches
//! `G11`. Fuzzy matches are case-insensitive literal searches over designation, name and info.
//!
//! The lookup is independent from the position engine: it only produces a canonical
//! coordinate string and its [`EquatorialCoordinate`].
//!
//! ## See also
//! ------------
//! * [`reformat_coordinates`] – Normalization of the catalog coordinates.
//! * [`ResolvedTargetCache`] – Memo of the last resolved name.

use std::fmt;
use std::io::Read;
use std::path::Path;

use log::debug;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::coordinates::{parse_ra_dec, reformat_coordinates, trim_spaces};
use crate::planner_errors::PlannerError;
use crate::ref_system::EquatorialCoordinate;

/// Catalogs recognized from target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    Messier,
    Ngc,
    Ic,
    Rcw,
    Sharpless,
    Barnard,
    Cederblad,
}

impl Catalog {
    pub fn name(self) -> &'static str {
        match self {
            Catalog::Messier => "Messier",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Rcw => "RCW",
            Catalog::Sharpless => "Sharpless",
            Catalog::Barnard => "Barnard",
            Catalog::Cederblad => "Cederblad",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a query is compared with catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The designation column contains the canonical designation
    Designation,
    /// Designation, name or info contains the name, not followed by a digit
    Exact,
    /// Designation, name or info contains the name, ignoring case
    Fuzzy,
}

/// A classified target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Canonical designation, or the trimmed name for fuzzy queries
    pub name: String,
    /// Catalog to search, `None` to search all of them
    pub catalog: Option<Catalog>,
    pub mode: MatchMode,
}

impl CatalogQuery {
    /// Classify a target name by its catalog prefix.
    pub fn from_name(name: &str) -> Self {
        let trimmed = trim_spaces(name);
        let upname = trimmed.to_uppercase().replace(' ', "");
        let digit_at = |i: usize| upname.as_bytes().get(i).is_some_and(u8::is_ascii_digit);
        let designation = |catalog, label: &str, prefixes: &[&str]| {
            let number = prefixes
                .iter()
                .find_map(|p| upname.strip_prefix(p))
                .unwrap_or(&upname);
            CatalogQuery {
                name: format!("{label} {number}").trim_end().to_string(),
                catalog: Some(catalog),
                mode: MatchMode::Designation,
            }
        };

        if upname.starts_with("MESSIER") || (upname.starts_with('M') && digit_at(1)) {
            designation(Catalog::Messier, "M", &["MESSIER", "M"])
        } else if upname.starts_with("NGC") {
            designation(Catalog::Ngc, "NGC", &["NGC"])
        } else if upname.starts_with("IC") {
            designation(Catalog::Ic, "IC", &["IC"])
        } else if upname.starts_with("RCW") {
            designation(Catalog::Rcw, "RCW", &["RCW"])
        } else if upname.starts_with("SH2") {
            CatalogQuery {
                name: upname.clone(),
                catalog: Some(Catalog::Sharpless),
                mode: MatchMode::Designation,
            }
        } else if upname.starts_with("GUM") || (upname.starts_with('G') && digit_at(1)) {
            let number = upname
                .strip_prefix("GUM")
                .or_else(|| upname.strip_prefix('G'))
                .unwrap_or(&upname);
            CatalogQuery {
                name: format!("G{number}"),
                catalog: Some(Catalog::Rcw),
                mode: MatchMode::Exact,
            }
        } else if upname.starts_with("BARNARD") || (upname.starts_with('B') && digit_at(1)) {
            designation(Catalog::Barnard, "B", &["BARNARD", "B"])
        } else if upname.starts_with("CEDERBLAD") || (upname.starts_with("CED") && digit_at(3)) {
            designation(Catalog::Cederblad, "Ced", &["CEDERBLAD", "CED"])
        } else {
            CatalogQuery {
                name: trimmed,
                catalog: None,
                mode: MatchMode::Fuzzy,
            }
        }
    }
}

/// One row of a target catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub designation: String,
    /// Right ascension as written in the catalog, in any shape [`reformat_coordinates`] accepts
    pub ra: String,
    pub dec: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
}

/// Entries of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCatalog {
    pub catalog: Catalog,
    pub entries: Vec<CatalogEntry>,
}

impl TargetCatalog {
    pub fn new(catalog: Catalog, entries: Vec<CatalogEntry>) -> Self {
        TargetCatalog { catalog, entries }
    }

    /// Read a catalog from CSV with a `designation,ra,dec,name,info` header.
    pub fn from_csv_reader<R: Read>(catalog: Catalog, reader: R) -> Result<Self, PlannerError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let entries = csv_reader
            .deserialize::<CatalogEntry>()
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} entries into the {catalog} catalog", entries.len());
        Ok(TargetCatalog { catalog, entries })
    }

    pub fn from_csv_file(catalog: Catalog, path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let file = std::fs::File::open(path)?;
        TargetCatalog::from_csv_reader(catalog, file)
    }

    /// First entry matching the query, ignoring the query's catalog restriction.
    pub fn find(&self, query: &CatalogQuery) -> Option<&CatalogEntry> {
        match query.mode {
            MatchMode::Designation => self
                .entries
                .iter()
                .find(|e| contains_whole_number(&e.designation, &query.name)),
            MatchMode::Exact => self.entries.iter().find(|e| {
                [&e.designation, &e.name, &e.info]
                    .iter()
                    .any(|field| contains_whole_number(field, &query.name))
            }),
            MatchMode::Fuzzy => {
                let pattern = RegexBuilder::new(&regex::escape(&query.name))
                    .case_insensitive(true)
                    .build()
                    .ok()?;
                self.entries.iter().find(|e| {
                    [&e.designation, &e.name, &e.info]
                        .iter()
                        .any(|field| pattern.is_match(field))
                })
            }
        }
    }
}

/// `haystack` contains `needle` at a position not followed by another digit.
fn contains_whole_number(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(i, _)| {
        !haystack[i + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

/// A name resolved to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    /// Catalog designation of the matching entry
    pub designation: String,
    /// Canonical `HH:MM:SS DD:MM:SS` form
    pub coordinates: String,
    pub coord: EquatorialCoordinate,
}

/// Resolve a target name from local catalogs.
///
/// Arguments
/// ---------
/// * `name`: the target name as typed.
/// * `catalogs`: the loaded catalogs, searched in order.
///
/// Return
/// ------
/// * The first matching entry with its coordinates, or `None` if nothing matches or the
///   matching entry's coordinates are malformed.
pub fn resolve_from_catalogs(name: &str, catalogs: &[TargetCatalog]) -> Option<ResolvedTarget> {
    let query = CatalogQuery::from_name(name);
    if query.name.is_empty() {
        return None;
    }

    let entry = catalogs
        .iter()
        .filter(|c| query.catalog.map_or(true, |wanted| wanted == c.catalog))
        .find_map(|c| c.find(&query));
    let Some(entry) = entry else {
        debug!("{} not found ({:?} match in {:?})", query.name, query.mode, query.catalog);
        return None;
    };

    let coordinates = reformat_coordinates(&format!("{} {}", entry.ra, entry.dec))?;
    let coord = parse_ra_dec(&coordinates)?;
    debug!("{} resolved to {} at {coordinates}", query.name, entry.designation);
    Some(ResolvedTarget {
        designation: entry.designation.clone(),
        coordinates,
        coord,
    })
}

/// The last resolved name and its result, kept by the caller between lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTargetCache {
    last: Option<(String, ResolvedTarget)>,
}

impl ResolvedTargetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `name`, if it is the last name resolved.
    pub fn get(&self, name: &str) -> Option<&ResolvedTarget> {
        self.last
            .as_ref()
            .filter(|(last, _)| last == name)
            .map(|(_, target)| target)
    }

    pub fn store(&mut self, name: impl Into<String>, target: ResolvedTarget) {
        self.last = Some((name.into(), target));
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Return the cached result for `name`, or call `resolver` and remember a successful result.
    pub fn resolve_with<F>(&mut self, name: &str, resolver: F) -> Option<ResolvedTarget>
    where
        F: FnOnce(&str) -> Option<ResolvedTarget>,
    {
        if let Some(target) = self.get(name) {
            return Some(target.clone());
        }
        let target = resolver(name)?;
        self.store(name, target.clone());
        Some(target)
    }
}

#[cfg(test)]
mod catalog_test {
    use super::*;
    use std::cell::Cell;

    fn entry(designation: &str, ra: &str, dec: &str, name: &str, info: &str) -> CatalogEntry {
        CatalogEntry {
            designation: designation.into(),
            ra: ra.into(),
            dec: dec.into(),
            name: name.into(),
            info: info.into(),
        }
    }

    fn catalogs() -> Vec<TargetCatalog> {
        vec![
            TargetCatalog::new(
                Catalog::Messier,
                vec![
                    entry("M 10", "16 57 08.9", "-04 05 58", "", "Globular cluster"),
                    entry("M 1", "05 34 31.9", "+22 00 52", "Crab Nebula", ""),
                ],
            ),
            TargetCatalog::new(
                Catalog::Rcw,
                vec![
                    entry("RCW 32", "08 59 05", "-43 45 00", "", "G11"),
                    entry("RCW 33", "09 00 00", "-42 00 00", "", "G1, RCW 33"),
                ],
            ),
        ]
    }

    #[test]
    fn test_query_classification() {
        let q = CatalogQuery::from_name(" messier  31 ");
        assert_eq!(q.name, "M 31");
        assert_eq!(q.catalog, Some(Catalog::Messier));
        assert_eq!(q.mode, MatchMode::Designation);

        assert_eq!(CatalogQuery::from_name("ngc7000").name, "NGC 7000");
        assert_eq!(CatalogQuery::from_name("IC 1396").catalog, Some(Catalog::Ic));
        assert_eq!(CatalogQuery::from_name("Sh2-129").name, "SH2-129");

        let gum = CatalogQuery::from_name("Gum 12");
        assert_eq!(gum.name, "G12");
        assert_eq!(gum.catalog, Some(Catalog::Rcw));
        assert_eq!(gum.mode, MatchMode::Exact);

        assert_eq!(CatalogQuery::from_name("Barnard 33").name, "B 33");
        assert_eq!(CatalogQuery::from_name("Ced214").name, "Ced 214");

        let fuzzy = CatalogQuery::from_name("Crab  Nebula");
        assert_eq!(fuzzy.name, "Crab Nebula");
        assert_eq!(fuzzy.catalog, None);
        assert_eq!(fuzzy.mode, MatchMode::Fuzzy);

        // "Mars" is not a Messier number
        assert_eq!(CatalogQuery::from_name("Mars").mode, MatchMode::Fuzzy);
    }

    #[test]
    fn test_whole_number_match() {
        assert!(contains_whole_number("G1, RCW 33", "G1"));
        assert!(!contains_whole_number("G11", "G1"));
        assert!(contains_whole_number("G11 and G1", "G1"));
        assert!(!contains_whole_number("M 10", "M 1"));
    }

    #[test]
    fn test_resolve_designation() {
        let target = resolve_from_catalogs("M1", &catalogs()).unwrap();
        assert_eq!(target.designation, "M 1");
        assert_eq!(target.coordinates, "05:34:31.90 22:00:52");
    }

    #[test]
    fn test_resolve_gum_by_exact_match() {
        let target = resolve_from_catalogs("Gum 1", &catalogs()).unwrap();
        assert_eq!(target.designation, "RCW 33");
    }

    #[test]
    fn test_resolve_fuzzy_across_catalogs() {
        let target = resolve_from_catalogs("crab (nebula", &catalogs());
        assert_eq!(target, None);
        let target = resolve_from_catalogs("crab nebula", &catalogs()).unwrap();
        assert_eq!(target.designation, "M 1");
        assert_eq!(resolve_from_catalogs("NGC 7000", &catalogs()), None);
        assert_eq!(resolve_from_catalogs("   ", &catalogs()), None);
    }

    #[test]
    fn test_csv_catalog() {
        let data = "designation,ra,dec,name,info\nNGC 7000,20 59 17.1,+44 31 44,North America Nebula,\n";
        let catalog = TargetCatalog::from_csv_reader(Catalog::Ngc, data.as_bytes()).unwrap();
        assert_eq!(catalog.entries.len(), 1);
        let target = resolve_from_catalogs("NGC7000", &[catalog]).unwrap();
        assert_eq!(target.coordinates, "20:59:17.10 44:31:44");

        let broken = "designation,ra\nNGC 1\n";
        assert!(matches!(
            TargetCatalog::from_csv_reader(Catalog::Ngc, broken.as_bytes()),
            Err(PlannerError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_cache_remembers_last_name() {
        let calls = Cell::new(0);
        let mut cache = ResolvedTargetCache::new();
        let resolver = |name: &str| {
            calls.set(calls.get() + 1);
            resolve_from_catalogs(name, &catalogs())
        };

        let first = cache.resolve_with("M1", resolver).unwrap();
        let second = cache.resolve_with("M1", resolver).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        assert_eq!(cache.resolve_with("M99", resolver), None);
        assert_eq!(calls.get(), 2);
        assert!(cache.get("M1").is_some());

        cache.clear();
        assert_eq!(cache.get("M1"), None);
    }
}
