/// Opacity of touch feedback: full while a finger is down, then a timed
/// linear decay to zero after touch-end.
#[derive(Clone, Debug)]
pub struct TouchFade {
    delay_ms: f64,
    duration_ms: f64,
    released_at_ms: Option<f64>,
    active: bool,
}

impl TouchFade {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            released_at_ms: None,
            active: false,
        }
    }

    /// New touch input: back to full opacity.
    pub fn touch(&mut self) {
        self.active = true;
        self.released_at_ms = None;
    }

    pub fn release(&mut self, now_ms: f64) {
        if self.active {
            self.active = false;
            self.released_at_ms = Some(now_ms);
        }
    }

    /// Current value in \[0, 1\]. Zero before any touch has happened.
    pub fn value(&self, now_ms: f64) -> f32 {
        if self.active {
            return 1.0;
        }
        let Some(t0) = self.released_at_ms else {
            return 0.0;
        };
        let elapsed = now_ms - t0 - self.delay_ms;
        if elapsed <= 0.0 {
            return 1.0;
        }
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / self.duration_ms).clamp(0.0, 1.0) as f32
    }
}

impl Default for TouchFade {
    fn default() -> Self {
        Self::new(
            crate::constants::TOUCH_FADE_DELAY_MS,
            crate::constants::TOUCH_FADE_DURATION_MS,
        )
    }
}
