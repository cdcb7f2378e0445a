//! Cargador del dataset de nombres desde archivos

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::names::{NameDataset, NameGender, NameRecord};
use crate::error::Result;

/// Registro tal como aparece en un dataset JSON
#[derive(Debug, Deserialize)]
struct JsonRecord {
    name: String,
    gender: String,
    #[serde(default)]
    countries: Vec<String>,
}

pub struct DatasetLoader;

impl DatasetLoader {
    /// Carga un dataset eligiendo el formato por la extensión del archivo
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<NameDataset> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let dataset = if is_json {
            Self::load_json(path)?
        } else {
            Self::load_text(path)?
        };

        info!(
            path = %path.display(),
            records = dataset.len(),
            "dataset de nombres cargado"
        );
        Ok(dataset)
    }

    /// Carga un dataset de texto
    ///
    /// Formato esperado: nombre|género|países
    /// Ejemplo: andrea|f|ES,DE
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<NameDataset> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if let Some(record) = Self::parse_line(&line, idx + 1) {
                records.push(record);
            }
        }

        Ok(NameDataset::new(records))
    }

    /// Carga un dataset JSON: array de objetos `{name, gender, countries?}`
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NameDataset> {
        let file = File::open(path.as_ref())?;
        let raw: Vec<JsonRecord> = serde_json::from_reader(BufReader::new(file))?;

        let records = raw
            .into_iter()
            .enumerate()
            .filter_map(|(idx, r)| {
                if r.name.trim().is_empty() {
                    warn!(entry = idx, "nombre vacío, entrada ignorada");
                    return None;
                }
                match NameGender::parse(&r.gender) {
                    Some(gender) => Some(NameRecord::new(&r.name, gender, r.countries)),
                    None => {
                        warn!(entry = idx, gender = %r.gender, "género desconocido, entrada ignorada");
                        None
                    }
                }
            })
            .collect();

        Ok(NameDataset::new(records))
    }

    /// Interpreta una línea del formato de texto.
    /// Líneas vacías, comentarios y entradas mal formadas devuelven None.
    fn parse_line(line: &str, line_num: usize) -> Option<NameRecord> {
        let line = line.trim();

        // Ignorar líneas vacías y comentarios
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let parts: Vec<&str> = line.split('|').collect();
        let name = parts[0].trim();
        if name.is_empty() {
            warn!(line = line_num, "nombre vacío, línea ignorada");
            return None;
        }

        let Some(gender) = parts.get(1).and_then(|g| NameGender::parse(g)) else {
            warn!(line = line_num, name, "género ausente o desconocido, línea ignorada");
            return None;
        };

        let countries = parts
            .get(2)
            .map(|c| c.split(',').collect::<Vec<_>>())
            .unwrap_or_default();

        Some(NameRecord::new(name, gender, countries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_formats() {
        let record = DatasetLoader::parse_line("Andrea|f|ES, de", 1).unwrap();
        assert_eq!(record.name, "andrea");
        assert_eq!(record.gender, NameGender::Female);
        assert!(record.has_country("ES"));
        assert!(record.has_country("DE"));

        let record = DatasetLoader::parse_line("carlos|m", 2).unwrap();
        assert!(!record.has_any_country());

        let record = DatasetLoader::parse_line("alex|u|", 3).unwrap();
        assert_eq!(record.gender, NameGender::Unisex);
        assert!(!record.has_any_country());
    }

    #[test]
    fn test_parse_line_skips_malformed() {
        assert!(DatasetLoader::parse_line("", 1).is_none());
        assert!(DatasetLoader::parse_line("# comentario", 2).is_none());
        assert!(DatasetLoader::parse_line("carlos", 3).is_none());
        assert!(DatasetLoader::parse_line("carlos|x", 4).is_none());
        assert!(DatasetLoader::parse_line("|m", 5).is_none());
    }

    #[test]
    fn test_load_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nombres de prueba").unwrap();
        writeln!(file, "Carlos|m").unwrap();
        writeln!(file, "Pamela|f").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "roto|zz").unwrap();
        writeln!(file, "andrea|m|IT").unwrap();
        file.flush().unwrap();

        let dataset = DatasetLoader::load_text(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[2].name, "andrea");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Carlos", "gender": "male"}},
                {{"name": "Andrea", "gender": "male", "countries": ["it"]}},
                {{"name": "Nadie", "gender": "robot"}}
            ]"#
        )
        .unwrap();
        file.flush().unwrap();

        let dataset = DatasetLoader::load_from_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.records()[1].has_country("IT"));
    }

    #[test]
    fn test_load_json_skips_empty_names() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[
                {{"name": "", "gender": "male"}},
                {{"name": "   ", "gender": "female"}},
                {{"name": "Pamela", "gender": "female"}}
            ]"#
        )
        .unwrap();
        file.flush().unwrap();

        let dataset = DatasetLoader::load_json(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "pamela");
    }

    #[test]
    fn test_load_missing_file() {
        let result = DatasetLoader::load_from_file("no/existe/names.txt");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
