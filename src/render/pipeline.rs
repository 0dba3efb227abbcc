use rayon::prelude::*;

use crate::{
    config::RenderConfig,
    foundation::error::{WaveformError, WaveformResult},
    render::{
        envelope::{EnvelopeKind, render_envelope_kind},
        raster::RasterLayer,
    },
    source::SampleSource,
};

/// One layer to extract: which envelope, drawn how.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSpec {
    pub kind: EnvelopeKind,
    pub config: RenderConfig,
}

impl LayerSpec {
    pub fn new(kind: EnvelopeKind, config: RenderConfig) -> Self {
        Self { kind, config }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Extract every layer in `specs` from the same channel, preserving order.
///
/// With `threading.parallel` each layer runs on its own rayon worker; the
/// source is only read, so the layers share it.
pub fn render_layers<S: SampleSource + Sync + ?Sized>(
    source: &S,
    channel: u16,
    specs: &[LayerSpec],
    threading: &RenderThreading,
) -> WaveformResult<Vec<RasterLayer>> {
    if threading.parallel {
        validate_threads(threading.threads)?;
    }
    if !threading.parallel || specs.len() < 2 {
        return specs
            .iter()
            .map(|spec| render_envelope_kind(spec.kind, source, channel, &spec.config))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    tracing::debug!(
        layers = specs.len(),
        threads = pool.current_num_threads(),
        "parallel layer render"
    );
    pool.install(|| {
        specs
            .par_iter()
            .map(|spec| render_envelope_kind(spec.kind, source, channel, &spec.config))
            .collect()
    })
}

fn validate_threads(threads: Option<usize>) -> WaveformResult<()> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(WaveformError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> WaveformResult<rayon::ThreadPool> {
    validate_threads(threads)?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| WaveformError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
