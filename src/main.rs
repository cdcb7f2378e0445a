use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gender_inference::batch::process_batch;
use gender_inference::{Config, GenderEngine, NameDataset, TracingDiagnostics};

fn main() -> Result<()> {
    let config = Config::parse();

    // Trazas a stderr para no mezclarlas con la salida JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    config.validate()?;

    let dataset = NameDataset::load_from_file(&config.dataset).with_context(|| {
        format!(
            "No se pudo cargar el dataset '{}'",
            config.dataset.display()
        )
    })?;

    let mut engine = GenderEngine::new(Arc::new(dataset));
    if config.debug {
        engine = engine.with_diagnostics(Arc::new(TracingDiagnostics));
    }
    let options = config.inference_options();
    info!(records = engine.dataset().len(), ?options, "motor listo");

    let mut out: Box<dyn Write> = match config.output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Error creando archivo '{}'", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    if let Some(ref input) = config.input {
        let file = File::open(input)
            .with_context(|| format!("Error leyendo archivo '{}'", input.display()))?;
        let summary = process_batch(&engine, &options, BufReader::new(file), &mut out)?;
        info!(
            processed = summary.processed,
            matched = summary.matched,
            skipped = summary.skipped,
            "lote completado"
        );
    } else if let Some(ref name) = config.name {
        let result = engine.infer(name, &options)?;
        serde_json::to_writer(&mut out, &result)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}
