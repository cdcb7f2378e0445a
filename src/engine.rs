//! Motor principal de inferencia
//!
//! Compone normalización, búsqueda de candidatos, filtro por país, ordenación
//! y puntuación, y aplica el reintento difuso para nombres unisex.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::country::filter_by_country;
use crate::diagnostics::Diagnostics;
use crate::dictionary::{NameDataset, NameGender, NameRecord};
use crate::error::Result;
use crate::matching::{find_candidates, MatchCandidate};
use crate::normalizer::{normalize, NormalizedName};
use crate::ranking::rank;
use crate::scoring::{diacritics_penalty, score};

/// Opciones de una llamada a `infer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceOptions {
    /// Búsqueda difusa. `None` significa "no indicada" y habilita el
    /// reintento difuso; `Some(false)` lo desactiva.
    pub fuzzy: Option<bool>,
    /// Incluir los registros emparejados en el resultado
    pub export_matches: bool,
    /// Desactiva la variante sin diacríticos
    pub diacritics_sensitive: bool,
    /// País preferido para desambiguar homónimos
    pub country: Option<String>,
}

impl InferenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = Some(fuzzy);
        self
    }

    pub fn with_export_matches(mut self, export: bool) -> Self {
        self.export_matches = export;
        self
    }

    pub fn with_diacritics_sensitive(mut self, sensitive: bool) -> Self {
        self.diacritics_sensitive = sensitive;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Resultado de la inferencia
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    /// None si no hubo coincidencias
    pub gender: Option<NameGender>,
    /// Confianza; puede ser negativa tras la penalización por diacríticos
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diacritics_removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<NameRecord>>,
}

impl InferenceResult {
    pub fn no_match() -> Self {
        Self {
            gender: None,
            score: None,
            diacritics_removed: None,
            matches: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.gender.is_some()
    }
}

/// Resultado intermedio de una pasada completa del pipeline
struct Pass<'a> {
    candidates: Vec<MatchCandidate<'a>>,
    gender: Option<NameGender>,
    score: Option<f64>,
    diacritics_removed: bool,
}

impl Pass<'_> {
    /// Una única coincidencia y además unisex
    fn is_lone_unisex(&self) -> bool {
        self.gender == Some(NameGender::Unisex) && self.candidates.len() == 1
    }

    fn into_result(self, export_matches: bool) -> InferenceResult {
        InferenceResult {
            gender: self.gender,
            score: self.score,
            diacritics_removed: self.diacritics_removed.then_some(true),
            matches: export_matches
                .then(|| self.candidates.iter().map(|c| c.record.clone()).collect()),
        }
    }
}

/// Motor reutilizable: dataset compartido y colaborador de diagnóstico opcional
#[derive(Clone)]
pub struct GenderEngine {
    dataset: Arc<NameDataset>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl GenderEngine {
    pub fn new(dataset: Arc<NameDataset>) -> Self {
        Self {
            dataset,
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn dataset(&self) -> &NameDataset {
        &self.dataset
    }

    /// Infiere el género de `name`.
    /// Solo falla con `Error::InvalidArgument` si el nombre está vacío.
    pub fn infer(&self, name: &str, options: &InferenceOptions) -> Result<InferenceResult> {
        infer_with(&self.dataset, self.diagnostics.as_deref(), name, options)
    }
}

impl std::fmt::Debug for GenderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenderEngine")
            .field("records", &self.dataset.len())
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

/// Inferencia puntual sin diagnóstico
pub fn infer(
    dataset: &NameDataset,
    name: &str,
    options: &InferenceOptions,
) -> Result<InferenceResult> {
    infer_with(dataset, None, name, options)
}

/// Inferencia con un colaborador de diagnóstico opcional.
///
/// Como mucho dos pasadas: si la búsqueda difusa no se indicó y la primera
/// pasada da un único candidato unisex, se repite con búsqueda difusa.
pub fn infer_with(
    dataset: &NameDataset,
    diagnostics: Option<&dyn Diagnostics>,
    name: &str,
    options: &InferenceOptions,
) -> Result<InferenceResult> {
    let first = run_pass(dataset, diagnostics, name, options, options.fuzzy.unwrap_or(false))?;

    if options.fuzzy.is_none() && first.is_lone_unisex() {
        emit(diagnostics, || {
            format!("'{}': única coincidencia unisex, reintento difuso", name)
        });
        let retry = run_pass(dataset, diagnostics, name, options, true)?;
        return Ok(retry.into_result(options.export_matches));
    }

    Ok(first.into_result(options.export_matches))
}

fn run_pass<'a>(
    dataset: &'a NameDataset,
    diagnostics: Option<&dyn Diagnostics>,
    name: &str,
    options: &InferenceOptions,
    fuzzy: bool,
) -> Result<Pass<'a>> {
    let normalized = normalize(name, options.diacritics_sensitive)?;

    let found = find_candidates(&normalized, dataset, fuzzy);
    emit(diagnostics, || {
        format!(
            "tokens {:?} (difusa: {}): {} candidatos",
            normalized.tokens,
            fuzzy,
            found.len()
        )
    });

    let filtered = filter_by_country(found, options.country.as_deref());
    if options.country.is_some() {
        emit(diagnostics, || {
            format!(
                "filtro de país {:?}: {} candidatos",
                options.country,
                filtered.len()
            )
        });
    }

    let ranked = rank(filtered, &normalized.tokens, fuzzy);
    let scored = score(&ranked);

    let mut pass = Pass {
        candidates: ranked,
        gender: scored.gender,
        score: scored.score,
        diacritics_removed: false,
    };
    apply_diacritics_penalty(&mut pass, &normalized);

    emit(diagnostics, || {
        format!(
            "resultado: género {:?}, puntuación {:?}",
            pass.gender, pass.score
        )
    });

    Ok(pass)
}

/// Resta `(distancia / longitud)^2` si quitar diacríticos cambió el nombre.
/// La puntuación no se acota y puede quedar negativa.
fn apply_diacritics_penalty(pass: &mut Pass<'_>, normalized: &NormalizedName) {
    let Some(plain) = normalized.plain.as_deref() else {
        return;
    };
    if !normalized.diacritics_removed() {
        return;
    }

    pass.diacritics_removed = true;
    if let Some(score) = pass.score.as_mut() {
        *score -= diacritics_penalty(&normalized.lowered, plain);
    }
}

fn emit<F>(diagnostics: Option<&dyn Diagnostics>, line: F)
where
    F: FnOnce() -> String,
{
    if let Some(sink) = diagnostics {
        sink.emit(&line());
    }
}
