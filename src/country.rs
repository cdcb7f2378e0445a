//! Desambiguación de candidatos por país

use std::collections::HashSet;

use crate::matching::MatchCandidate;
use crate::normalizer::strip_diacritics;

/// Filtra los candidatos según el país preferido.
///
/// Si algún candidato pertenece al país, se conservan esos candidatos junto con
/// los que tengan un nombre que no aparezca entre ellos. Si ninguno pertenece,
/// solo quedan los candidatos sin país asignado. El orden relativo se mantiene.
pub fn filter_by_country<'a>(
    candidates: Vec<MatchCandidate<'a>>,
    country: Option<&str>,
) -> Vec<MatchCandidate<'a>> {
    let Some(country) = country.map(|c| c.trim().to_uppercase()) else {
        return candidates;
    };

    let preferred_names: HashSet<String> = candidates
        .iter()
        .filter(|c| c.record.has_country(&country))
        .map(|c| comparison_key(&c.record.name))
        .collect();

    if preferred_names.is_empty() {
        return candidates
            .into_iter()
            .filter(|c| !c.record.has_any_country())
            .collect();
    }

    candidates
        .into_iter()
        .filter(|c| {
            c.record.has_country(&country)
                || !preferred_names.contains(&comparison_key(&c.record.name))
        })
        .collect()
}

fn comparison_key(name: &str) -> String {
    strip_diacritics(&name.to_lowercase())
}
