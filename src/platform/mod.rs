//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger initialization
//! - Frame delta clamping for the driver loop
//! - The JavaScript-facing engine facade (web only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Longest frame delta handed to the engine (a stalled tab shouldn't teleport obstacles)
pub const MAX_FRAME_DT: f32 = 0.1;

/// Clamp a raw frame delta (seconds) before passing it to `Engine::update`
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 }
}

/// Initialize logging for the current platform
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Initialize logging for the current platform
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_frame_dt() {
        assert_eq!(clamp_frame_dt(0.016), 0.016);
        assert_eq!(clamp_frame_dt(2.5), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN), 0.0);
    }
}
