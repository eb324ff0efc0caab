//! Details lookup and facility-type distribution.

use std::collections::BTreeMap;

use fl_core::Facility;

/// Number of facilities of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeCount {
    pub facility_type: String,
    pub count:         usize,
}

/// Count facilities per `facility_type`, sorted by type name.
pub fn type_distribution(facilities: &[Facility]) -> Vec<TypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for f in facilities {
        *counts.entry(f.facility_type.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(t, count)| TypeCount { facility_type: t.to_owned(), count })
        .collect()
}

/// Facilities to show in the details table.
///
/// The selected name is, in priority order: the clicked marker's name, the
/// search text, the first filtered facility's name.  Every facility in `all`
/// with exactly that name is returned (names are not unique), so a search
/// text that is not an exact name selects nothing.
pub fn select_detail<'a>(
    all:      &'a [Facility],
    filtered: &'a [Facility],
    clicked:  Option<&str>,
    search:   Option<&str>,
) -> Vec<&'a Facility> {
    let selected = non_blank(clicked)
        .or_else(|| non_blank(search))
        .or_else(|| filtered.first().map(|f| f.name.as_str()));

    match selected {
        Some(name) => all.iter().filter(|f| f.name == name).collect(),
        None => Vec::new(),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
