//! Búsqueda de candidatos en el dataset
//!
//! Empareja cada token del nombre con los registros del dataset, de forma
//! exacta o difusa (distancia de edición acotada).

pub mod levenshtein;

use crate::dictionary::{NameDataset, NameRecord};
use crate::normalizer::NormalizedName;

pub use levenshtein::levenshtein_distance;

/// Registro emparejado con el token que lo activó
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate<'a> {
    pub record: &'a NameRecord,
    /// Posición del token de entrada que produjo la coincidencia
    pub token_index: usize,
}

impl<'a> MatchCandidate<'a> {
    pub fn new(record: &'a NameRecord, token_index: usize) -> Self {
        Self {
            record,
            token_index,
        }
    }

    /// Posición del nombre del registro entre los tokens, si aparece literalmente
    pub fn exact_position(&self, tokens: &[String]) -> Option<usize> {
        tokens.iter().position(|t| t == &self.record.name)
    }
}

/// Devuelve los candidatos en orden de dataset y, dentro de cada registro,
/// en orden de token. Un registro aparece como mucho una vez por token.
pub fn find_candidates<'a>(
    name: &NormalizedName,
    dataset: &'a NameDataset,
    fuzzy: bool,
) -> Vec<MatchCandidate<'a>> {
    let mut candidates = Vec::new();

    for record in dataset.iter() {
        if fuzzy {
            for (idx, token) in name.fuzzy_tokens().iter().enumerate() {
                if is_fuzzy_match(&record.name, token) {
                    candidates.push(MatchCandidate::new(record, idx));
                }
            }
        } else {
            let token_count = name
                .tokens
                .len()
                .max(name.tokens_plain.as_ref().map_or(0, Vec::len));

            for idx in 0..token_count {
                if matches_exact(record, name, idx) {
                    candidates.push(MatchCandidate::new(record, idx));
                }
            }
        }
    }

    candidates
}

fn matches_exact(record: &NameRecord, name: &NormalizedName, idx: usize) -> bool {
    if name.tokens.get(idx).is_some_and(|t| t == &record.name) {
        return true;
    }
    name.tokens_plain
        .as_ref()
        .and_then(|plain| plain.get(idx))
        .is_some_and(|t| t == &record.name)
}

/// Coincidencia difusa: distancia menor que 2, misma longitud
/// y mismos dos primeros caracteres.
pub fn is_fuzzy_match(candidate: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if candidate.chars().count() != token.chars().count() {
        return false;
    }
    if !candidate.chars().take(2).eq(token.chars().take(2)) {
        return false;
    }
    levenshtein_distance(candidate, token) < 2
}
