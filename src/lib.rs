//! Gender inference - Inferencia del género asociado a un nombre propio
//!
//! Empareja los tokens de un nombre con un dataset de nombres de pila
//! etiquetados y deriva una puntuación de confianza del voto ponderado.

pub mod batch;
pub mod config;
pub mod country;
pub mod diagnostics;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod matching;
pub mod normalizer;
pub mod ranking;
pub mod scoring;

pub use config::Config;
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use dictionary::{NameDataset, NameGender, NameRecord};
pub use engine::{infer, infer_with, GenderEngine, InferenceOptions, InferenceResult};
pub use error::{Error, Result};
