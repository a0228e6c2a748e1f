//! Log subscriber shared by the binary and tests.
//!
//! stdout belongs to the alternate screen, so the binary only installs this
//! when `RAYCASTER_LOG_PATH` names a file. Everything down to `trace!` is kept,
//! including rejected moves.

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Plain-text fmt subscriber writing to `writer`.
pub fn subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish()
}
