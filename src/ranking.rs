//! Ordenación de candidatos por posición del token

use crate::matching::MatchCandidate;

/// Ordena los candidatos de forma estable.
///
/// En modo exacto, por índice del token que los activó. En modo difuso el
/// orden es más grueso: primero los que coinciden literalmente con el primer
/// token, al final los que no coinciden literalmente con ningún token.
pub fn rank<'a>(
    mut candidates: Vec<MatchCandidate<'a>>,
    tokens: &[String],
    fuzzy: bool,
) -> Vec<MatchCandidate<'a>> {
    if fuzzy {
        candidates.sort_by_key(|c| match c.exact_position(tokens) {
            Some(0) => 0u8,
            Some(_) => 1,
            None => 2,
        });
    } else {
        candidates.sort_by_key(|c| c.token_index);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{NameGender, NameRecord};

    fn tokens(name: &str) -> Vec<String> {
        name.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_exact_rank_is_stable_by_token_index() {
        let rose = NameRecord::global("rose", NameGender::Female);
        let ruby_f = NameRecord::global("ruby", NameGender::Female);
        let ruby_u = NameRecord::global("ruby", NameGender::Unisex);
        let candidates = vec![
            MatchCandidate::new(&rose, 1),
            MatchCandidate::new(&ruby_f, 0),
            MatchCandidate::new(&ruby_u, 0),
        ];

        let ranked = rank(candidates, &tokens("ruby rose"), false);
        assert_eq!(ranked[0].record.gender, NameGender::Female);
        assert_eq!(ranked[0].record.name, "ruby");
        assert_eq!(ranked[1].record.gender, NameGender::Unisex);
        assert_eq!(ranked[2].record.name, "rose");
    }

    #[test]
    fn test_fuzzy_rank_buckets() {
        let marta = NameRecord::global("marta", NameGender::Female);
        let carlos = NameRecord::global("carlos", NameGender::Male);
        let carla = NameRecord::global("carla", NameGender::Female);
        let marti = NameRecord::global("marti", NameGender::Male);
        let candidates = vec![
            MatchCandidate::new(&marta, 0),
            MatchCandidate::new(&carlos, 1),
            MatchCandidate::new(&carla, 1),
            MatchCandidate::new(&marti, 0),
        ];

        let ranked = rank(candidates, &tokens("marti carlos"), true);
        let names: Vec<&str> = ranked.iter().map(|c| c.record.name.as_str()).collect();
        assert_eq!(names, vec!["marti", "carlos", "marta", "carla"]);
    }
}
