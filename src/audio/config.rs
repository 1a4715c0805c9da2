use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub volume: u8,
    pub finish_poll_ms: u64,
    pub download_timeout_secs: u64,
}

impl AudioConfig {
    pub fn finish_poll(&self) -> Duration {
        Duration::from_millis(self.finish_poll_ms)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    pub fn gain(&self) -> f32 {
        self.volume.min(100) as f32 / 100.0
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            finish_poll_ms: 100,
            download_timeout_secs: 15,
        }
    }
}
