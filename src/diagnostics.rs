//! Trazas de diagnóstico opcionales
//!
//! El motor no consulta ningún indicador global: quien quiera trazas inyecta
//! un colaborador `Diagnostics`. Sin colaborador no se emite nada.

/// Destino de líneas de diagnóstico legibles
pub trait Diagnostics: Send + Sync {
    fn emit(&self, line: &str);
}

/// Reenvía cada línea a `tracing` con nivel debug
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, line: &str) {
        tracing::debug!(target: "gender_inference::diagnostics", "{}", line);
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        self(line)
    }
}
