//! Frame clock: host timestamps in, clamped simulation seconds out

/// Turns `requestAnimationFrame`-style timestamps (ms) into frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last_ms: None, max_dt }
    }

    /// Seconds since the previous frame, within `0..=max_dt`. The first frame
    /// after creation or `reset` is 0.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the last timestamp (tab hidden, game resumed)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
