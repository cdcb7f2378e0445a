//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::Parser;

use crate::engine::InferenceOptions;
use crate::error::{Error, Result};

/// Infiere el género asociado a un nombre propio
#[derive(Parser, Debug, Clone)]
#[command(name = "gender-inference")]
#[command(version)]
#[command(after_help = r#"EJEMPLOS:
    gender-inference "Carlos"
    gender-inference --country IT "Andrea"
    gender-inference --fuzzy --export-matches "Carloz"
    gender-inference --input nombres.txt --output resultados.jsonl"#)]
pub struct Config {
    /// Nombre a analizar
    pub name: Option<String>,

    /// Dataset de nombres (texto `nombre|género|países` o .json)
    #[arg(
        short = 'd',
        long,
        env = "GENDER_INFERENCE_DATASET",
        default_value = "data/names.txt"
    )]
    pub dataset: PathBuf,

    /// Fuerza la búsqueda difusa
    #[arg(short, long, conflicts_with = "no_fuzzy")]
    pub fuzzy: bool,

    /// Desactiva la búsqueda difusa, incluido el reintento para nombres unisex
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Incluye los registros emparejados en la salida
    #[arg(short = 'm', long)]
    pub export_matches: bool,

    /// No elimina diacríticos al buscar
    #[arg(long)]
    pub diacritics_sensitive: bool,

    /// País preferido para desambiguar (código, p. ej. IT)
    #[arg(short, long)]
    pub country: Option<String>,

    /// Archivo de entrada con un nombre por línea
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Archivo de salida (por defecto, salida estándar)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Muestra trazas de diagnóstico
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    /// Comprueba combinaciones que clap no puede expresar
    pub fn validate(&self) -> Result<()> {
        if self.name.is_none() && self.input.is_none() {
            return Err(Error::Config(
                "se requiere un NOMBRE o --input".to_string(),
            ));
        }
        if self.name.as_deref() == Some("") {
            return Err(Error::Config("el nombre no puede estar vacío".to_string()));
        }
        Ok(())
    }

    /// Opciones de inferencia equivalentes a los argumentos
    pub fn inference_options(&self) -> InferenceOptions {
        let fuzzy = if self.fuzzy {
            Some(true)
        } else if self.no_fuzzy {
            Some(false)
        } else {
            None
        };

        InferenceOptions {
            fuzzy,
            export_matches: self.export_matches,
            diacritics_sensitive: self.diacritics_sensitive,
            country: self.country.clone(),
        }
    }

    /// Filtro de trazas por defecto cuando RUST_LOG no está definido
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "gender_inference=debug"
        } else {
            "gender_inference=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("gender-inference").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["Carlos"]);
        assert_eq!(config.name.as_deref(), Some("Carlos"));
        assert!(config.validate().is_ok());
        assert_eq!(config.inference_options(), InferenceOptions::default());
        assert_eq!(config.default_log_filter(), "gender_inference=warn");
    }

    #[test]
    fn test_fuzzy_tri_state() {
        assert_eq!(parse(&["-f", "Ana"]).inference_options().fuzzy, Some(true));
        assert_eq!(parse(&["--no-fuzzy", "Ana"]).inference_options().fuzzy, Some(false));
        assert_eq!(parse(&["Ana"]).inference_options().fuzzy, None);

        let both = Config::try_parse_from(["gender-inference", "--fuzzy", "--no-fuzzy", "Ana"]);
        assert!(both.is_err());
    }

    #[test]
    fn test_options_from_flags() {
        let config = parse(&["-m", "--diacritics-sensitive", "-c", "IT", "Andrea"]);
        let options = config.inference_options();
        assert!(options.export_matches);
        assert!(options.diacritics_sensitive);
        assert_eq!(options.country.as_deref(), Some("IT"));
    }

    #[test]
    fn test_requires_name_or_input() {
        let config = parse(&[]);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = parse(&["--input", "nombres.txt"]);
        assert!(config.validate().is_ok());

        let config = parse(&[""]);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
