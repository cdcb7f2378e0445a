//! Procesamiento por lotes: un nombre por línea, un objeto JSON por línea

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::warn;

use crate::engine::{GenderEngine, InferenceOptions, InferenceResult};
use crate::error::Result;

#[derive(Serialize)]
struct BatchLine<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: InferenceResult,
}

/// Totales de una ejecución por lotes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub matched: usize,
    pub skipped: usize,
}

/// Infiere el género de cada línea de `reader` y escribe JSON Lines en `writer`.
/// Ignora líneas vacías y comentarios (`#`).
pub fn process_batch<R, W>(
    engine: &GenderEngine,
    options: &InferenceOptions,
    reader: R,
    mut writer: W,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let name = line.trim();

        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        match engine.infer(name, options) {
            Ok(result) => {
                summary.processed += 1;
                if result.is_match() {
                    summary.matched += 1;
                }
                serde_json::to_writer(&mut writer, &BatchLine { name, result })?;
                writeln!(writer)?;
            }
            Err(e) => {
                warn!(line = idx + 1, error = %e, "nombre ignorado");
                summary.skipped += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}
