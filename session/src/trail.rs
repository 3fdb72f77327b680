/// One sampled trail position; `born_ms` doubles as the dot id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub born_ms: u64,
    pub x: f32,
    pub y: f32,
}

impl TrailDot {
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.born_ms)
    }
}

/// Time-sampled trail of recent ball positions for the renderer's fade-out
#[derive(Debug)]
pub struct BallTrail {
    dots: Vec<TrailDot>,
    last_sample_ms: u64,
    interval_ms: u64,
    max_dots: usize,
    fade_ms: u64,
}

impl Default for BallTrail {
    fn default() -> Self {
        Self {
            dots: Vec::new(),
            last_sample_ms: 0,
            interval_ms: 40,
            max_dots: 20,
            fade_ms: 600,
        }
    }
}

impl BallTrail {
    pub fn new(interval_ms: u64, max_dots: usize, fade_ms: u64) -> Self {
        Self {
            interval_ms,
            max_dots,
            fade_ms,
            ..Self::default()
        }
    }

    /// Drop faded dots and, once per sampling interval, record a new one
    pub fn sample(&mut self, now_ms: u64, x: f32, y: f32) {
        let fade_ms = self.fade_ms;
        self.dots.retain(|d| d.age_ms(now_ms) < fade_ms);

        if now_ms.saturating_sub(self.last_sample_ms) >= self.interval_ms {
            self.last_sample_ms = now_ms;
            self.dots.push(TrailDot {
                born_ms: now_ms,
                x,
                y,
            });
            if self.dots.len() > self.max_dots {
                let excess = self.dots.len() - self.max_dots;
                self.dots.drain(..excess);
            }
        }
    }

    pub fn dots(&self) -> &[TrailDot] {
        &self.dots
    }

    pub fn clear(&mut self) {
        self.dots.clear();
    }
}
