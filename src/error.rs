//! Tipos de error del motor de inferencia

use thiserror::Error;

/// Resultado común de las operaciones de la biblioteca
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Nombre vacío o ausente
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),

    /// Error de E/S al leer el dataset o escribir resultados
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset JSON mal formado o error serializando resultados
    #[error("Error JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuración de línea de comandos rechazada
    #[error("Error de configuración: {0}")]
    Config(String),
}
