use thiserror::Error;

/// Reasons the background stays inert. None of these reach the page; the
/// entry point logs them at debug level and stops.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(&'static str),
    #[error("#{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("WebGPU is not available")]
    NoWebGpu,
    #[error("GPU setup failed: {0:#}")]
    Gpu(anyhow::Error),
    #[error("could not register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
