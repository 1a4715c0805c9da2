use rodio::{OutputStream, OutputStreamBuilder};

use crate::audio::error::AudioError;

pub fn open_output_stream() -> Result<OutputStream, AudioError> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?;
    // rodio prints to stderr on drop, which would land on top of the TUI.
    stream.log_on_drop(false);
    Ok(stream)
}
