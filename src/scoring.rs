//! Voto ponderado de género y cálculo de la puntuación de confianza

use crate::dictionary::NameGender;
use crate::matching::{levenshtein_distance, MatchCandidate};

/// Género resuelto y puntuación normalizada
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub gender: Option<NameGender>,
    pub score: Option<f64>,
}

impl Score {
    pub const NO_MATCH: Score = Score {
        gender: None,
        score: None,
    };
}

/// Puntúa candidatos ya ordenados.
///
/// El candidato en la posición `i` pesa `(n - i)^2`. Los masculinos suman,
/// los femeninos restan y los unisex solo cuentan en el máximo.
pub fn score(ranked: &[MatchCandidate<'_>]) -> Score {
    let n = ranked.len();
    if n == 0 {
        return Score::NO_MATCH;
    }

    let mut score_max = 0.0f64;
    let mut vote_sum = 0.0f64;
    let gender = gender_mode(ranked.iter().map(|c| c.record.gender));

    for (i, candidate) in ranked.iter().enumerate() {
        let weight = ((n - i) as f64).powi(2);
        score_max += weight;

        match candidate.record.gender {
            NameGender::Male => vote_sum += weight,
            NameGender::Female => vote_sum -= weight,
            NameGender::Unisex => {}
        }
    }

    if vote_sum == 0.0 {
        vote_sum = 1.0;
    }

    let mut raw = vote_sum.abs().sqrt();
    if ranked[0].record.gender == NameGender::Unisex && n > 1 {
        raw = ((n * n) as f64 - vote_sum).abs().sqrt();
    }

    Score {
        gender: Some(gender),
        score: Some(raw / score_max.sqrt()),
    }
}

/// Género más frecuente entre los no unisex; unisex si no hay ninguno.
/// En caso de empate gana el que apareció primero.
pub fn gender_mode<I>(genders: I) -> NameGender
where
    I: IntoIterator<Item = NameGender>,
{
    let mut counts: Vec<(NameGender, usize)> = Vec::with_capacity(2);

    for gender in genders {
        if gender == NameGender::Unisex {
            continue;
        }
        match counts.iter_mut().find(|(g, _)| *g == gender) {
            Some((_, count)) => *count += 1,
            None => counts.push((gender, 1)),
        }
    }

    let mut best: Option<(NameGender, usize)> = None;
    for (gender, count) in counts {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((gender, count));
        }
    }

    best.map_or(NameGender::Unisex, |(gender, _)| gender)
}

/// Penalización por diacríticos eliminados: `(distancia / longitud)^2`
pub fn diacritics_penalty(raw_name: &str, stripped_name: &str) -> f64 {
    let len = raw_name.chars().count();
    if len == 0 {
        return 0.0;
    }
    let distance = levenshtein_distance(raw_name, stripped_name);
    (distance as f64 / len as f64).powi(2)
}
