pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

const FRAME_STEP_MS: u128 = 100;

/// Current frame of a `frames`-long animation running at 10 fps.
pub fn animation_step(frames: usize) -> usize {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    (now / FRAME_STEP_MS) as usize % frames.max(1)
}

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "▶";
    }

    match animation_step(6) {
        0 | 5 => "▁",
        1 | 4 => "▃",
        _ => "▅",
    }
}

pub fn get_loading_track_icon() -> &'static str {
    const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
    FRAMES[animation_step(FRAMES.len())]
}
