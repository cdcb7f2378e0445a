//! Normalización y tokenización del nombre de entrada

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Nombre normalizado listo para la búsqueda de candidatos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Nombre completo en minúscula y en forma canónica NFC
    pub lowered: String,
    /// Tokens en minúscula, en el orden original (índice 0 = nombre principal)
    pub tokens: Vec<String>,
    /// Nombre en minúscula sin diacríticos, solo si el tratamiento está activo
    pub plain: Option<String>,
    /// Tokens sin diacríticos, solo si el tratamiento está activo
    pub tokens_plain: Option<Vec<String>>,
}

impl NormalizedName {
    /// True si quitar los diacríticos cambió el nombre
    pub fn diacritics_removed(&self) -> bool {
        self.plain
            .as_ref()
            .is_some_and(|plain| plain != &self.lowered)
    }

    /// Tokens contra los que se hace la búsqueda difusa
    pub fn fuzzy_tokens(&self) -> &[String] {
        self.tokens_plain.as_deref().unwrap_or(&self.tokens)
    }
}

/// Normaliza un nombre: minúscula, separación por espacios y,
/// salvo `diacritics_sensitive`, una variante sin diacríticos.
pub fn normalize(raw_name: &str, diacritics_sensitive: bool) -> Result<NormalizedName> {
    if raw_name.is_empty() {
        return Err(Error::InvalidArgument(
            "el nombre debe ser una cadena no vacía".to_string(),
        ));
    }

    // NFC antes de comparar con la variante sin diacríticos, que también sale en NFC
    let lowered: String = raw_name.to_lowercase().nfc().collect();
    let tokens = split_tokens(&lowered);

    let (plain, tokens_plain) = if diacritics_sensitive {
        (None, None)
    } else {
        let plain = strip_diacritics(&lowered);
        let tokens_plain = split_tokens(&plain);
        (Some(plain), Some(tokens_plain))
    };

    Ok(NormalizedName {
        lowered,
        tokens,
        plain,
        tokens_plain,
    })
}

/// Elimina las marcas combinantes tras la descomposición NFD
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}
