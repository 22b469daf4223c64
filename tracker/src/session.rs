use std::time::Instant;

/// Scroll-depth milestones, in the order they fire.
const MILESTONES: [u32; 4] = [25, 50, 75, 90];

/// Tracks how far down the page a visitor has scrolled.
///
/// Holds a monotonically non-decreasing high-water mark of the scroll
/// percentage. Each milestone fires at most once per watcher lifetime;
/// scrolling back up never un-fires one.
#[derive(Debug, Default)]
pub struct ScrollDepthWatcher {
    high_water: u32,
    reached: Vec<u32>,
}

impl ScrollDepthWatcher {
    pub fn new() -> ScrollDepthWatcher {
        ScrollDepthWatcher::default()
    }

    /// Feed one scroll sample. Returns every milestone newly crossed, in
    /// ascending order, so a jump from 10% to 80% yields 25, 50 and 75
    /// in a single pass.
    pub fn observe(&mut self, scroll_top: f64, doc_height: f64, win_height: f64) -> Vec<u32> {
        let range = doc_height - win_height;
        if range <= 0.0 {
            // The page does not scroll, there is no depth to measure.
            return Vec::new();
        }

        let percent = (scroll_top / range * 100.0).round() as u32;
        if percent <= self.high_water {
            return Vec::new();
        }
        self.high_water = percent;

        let mut crossed = Vec::new();
        for milestone in MILESTONES {
            if percent >= milestone && !self.reached.contains(&milestone) {
                self.reached.push(milestone);
                crossed.push(milestone);
            }
        }
        crossed
    }

    pub fn high_water(&self) -> u32 {
        self.high_water
    }
}

/// Measures wall time between page ready and unload.
pub struct PageSession {
    started: Instant,
    ended: bool,
}

impl PageSession {
    pub fn begin() -> PageSession {
        PageSession {
            started: Instant::now(),
            ended: false,
        }
    }

    /// Seconds on page, rounded to the nearest whole second. Yields a
    /// value on the first call only; there is no heartbeat, just this
    /// single terminal measurement.
    pub fn end(&mut self) -> Option<u64> {
        if self.ended {
            return None;
        }
        self.ended = true;

        Some(self.started.elapsed().as_secs_f64().round() as u64)
    }
}
