//! Registros de nombres de pila etiquetados con género
//!
//! Proporciona el dataset de referencia, inmutable y compartido entre llamadas.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

use super::loader::DatasetLoader;

/// Género asociado a un nombre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameGender {
    Male,
    Female,
    Unisex,
}

impl NameGender {
    /// Interpreta una etiqueta de género del dataset.
    /// Devuelve None para etiquetas desconocidas.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "masc" | "masculine" | "masculino" => Some(NameGender::Male),
            "f" | "female" | "fem" | "feminine" | "femenino" => Some(NameGender::Female),
            "u" | "unisex" | "ambiguo" => Some(NameGender::Unisex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NameGender::Male => "male",
            NameGender::Female => "female",
            NameGender::Unisex => "unisex",
        }
    }
}

impl fmt::Display for NameGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrada del dataset: nombre en minúscula, género y países opcionales
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameRecord {
    pub name: String,
    pub gender: NameGender,
    /// Códigos de país en mayúscula. Vacío = sin afinidad de país.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub countries: BTreeSet<String>,
}

impl NameRecord {
    /// Crea un registro normalizando nombre (minúscula, NFC) y países (mayúscula)
    pub fn new<I, S>(name: &str, gender: NameGender, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.trim().to_lowercase().nfc().collect(),
            gender,
            countries: countries
                .into_iter()
                .map(|c| c.as_ref().trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }

    /// Registro sin afinidad de país
    pub fn global(name: &str, gender: NameGender) -> Self {
        Self::new(name, gender, std::iter::empty::<&str>())
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    pub fn has_any_country(&self) -> bool {
        !self.countries.is_empty()
    }
}

/// Dataset de referencia de nombres
#[derive(Debug, Clone, Default)]
pub struct NameDataset {
    records: Vec<NameRecord>,
}

impl NameDataset {
    /// Construye el dataset descartando nombres vacíos y duplicados exactos
    pub fn new(records: Vec<NameRecord>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if record.name.is_empty() {
                continue;
            }
            if !seen.insert(record.clone()) {
                tracing::debug!(name = %record.name, "registro duplicado descartado");
                continue;
            }
            kept.push(record);
        }

        Self { records: kept }
    }

    /// Carga el dataset desde un archivo (texto `nombre|género|países` o JSON)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DatasetLoader::load_from_file(path)
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }

    /// Número de registros en el dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender_labels() {
        assert_eq!(NameGender::parse("m"), Some(NameGender::Male));
        assert_eq!(NameGender::parse("Female"), Some(NameGender::Female));
        assert_eq!(NameGender::parse(" unisex "), Some(NameGender::Unisex));
        assert_eq!(NameGender::parse("masculino"), Some(NameGender::Male));
        assert_eq!(NameGender::parse("x"), None);
    }

    #[test]
    fn test_record_normalization() {
        let record = NameRecord::new(" Andrea ", NameGender::Male, ["it", " de ", ""]);
        assert_eq!(record.name, "andrea");
        assert!(record.has_country("IT"));
        assert!(record.has_country("DE"));
        assert_eq!(record.countries.len(), 2);
    }

    #[test]
    fn test_record_name_is_nfc() {
        let decomposed = NameRecord::global("Jose\u{301}", NameGender::Male);
        let composed = NameRecord::global("Jos\u{E9}", NameGender::Male);
        assert_eq!(decomposed, composed);
    }

    #[test]
    fn test_dataset_drops_duplicates_and_empty_names() {
        let dataset = NameDataset::new(vec![
            NameRecord::global("Carlos", NameGender::Male),
            NameRecord::global("carlos", NameGender::Male),
            NameRecord::new("andrea", NameGender::Male, ["IT"]),
            NameRecord::global("andrea", NameGender::Female),
            NameRecord::global("  ", NameGender::Female),
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].name, "carlos");
        assert_eq!(dataset.records()[1].countries.len(), 1);
    }

    #[test]
    fn test_empty() {
        let dataset = NameDataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&NameGender::Unisex).unwrap();
        assert_eq!(json, "\"unisex\"");
    }
}
