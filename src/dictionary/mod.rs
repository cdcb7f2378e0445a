//! Módulo de diccionario
//!
//! Proporciona el dataset de nombres de referencia y su cargador.

pub mod loader;
pub mod names;

pub use loader::DatasetLoader;
pub use names::{NameDataset, NameGender, NameRecord};
