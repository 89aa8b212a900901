//! Cross-reference a disease verdict against the fungicide table.

use grapewatch_core::Verdict;

use crate::table::FungicideTable;

/// Search terms derived from a disease label.
///
/// Labels often pair a local name with an English one, e.g.
/// "Külleme (Powdery Mildew)". Each part is tried on its own as well as the
/// full label. Duplicates and blanks are dropped.
pub fn search_terms(label: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let mut push = |term: &str| {
        let term = term.trim();
        if !term.is_empty() && !terms.iter().any(|t| t.eq_ignore_ascii_case(term)) {
            terms.push(term.to_string());
        }
    };

    push(label);
    if let Some((before, rest)) = label.split_once('(') {
        push(before);
        if let Some((inner, _)) = rest.split_once(')') {
            push(inner);
        }
    }
    terms
}

/// Table rows relevant to the verdict's disease.
///
/// When a column is named after the disease, as in an efficacy table, the
/// rows with a value in that column are returned. Otherwise rows are kept
/// when any cell mentions the disease.
///
/// `None` when the verdict carries no disease to look up: the analysis
/// failed or the plant is healthy. An empty table means the disease is
/// not covered by the dataset.
pub fn treatments_for(table: &FungicideTable, verdict: &Verdict) -> Option<FungicideTable> {
    if verdict.is_unknown() || verdict.is_healthy() {
        return None;
    }
    let needles: Vec<String> = search_terms(verdict.disease_detected())
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    let mentions = |text: &str| {
        let text = text.to_lowercase();
        needles.iter().any(|needle| text.contains(needle))
    };

    let disease_columns: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| mentions(name.as_str()))
        .map(|(i, _)| i)
        .collect();

    if disease_columns.is_empty() {
        return Some(
            table.filter_rows(|row| row.iter().flatten().any(|cell| mentions(cell.as_str()))),
        );
    }
    Some(table.filter_rows(|row| {
        disease_columns
            .iter()
            .any(|&i| row.get(i).is_some_and(Option::is_some))
    }))
}
