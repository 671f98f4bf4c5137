use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not animating, the tick was ignored.
    Idle,
    Running,
    /// This tick landed on the target; the caller should stop its timer.
    Finished,
}

/// Count-up progress for one stats counter.
///
/// The value after tick `k` is `min(target, ceil(target * k * tick / duration))`,
/// computed in integers so every replay produces the same sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: u32,
    tick_ms: u32,
    ticks: u32,
    value: u32,
    running: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, config::COUNTER_DURATION_MS, config::COUNTER_TICK_MS)
    }

    pub fn with_timing(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(1),
            tick_ms: tick_ms.max(1),
            ticks: 0,
            value: 0,
            running: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        !self.running && self.ticks > 0 && self.value == self.target
    }

    /// Starts over from zero.
    pub fn restart(&mut self) {
        self.ticks = 0;
        self.value = 0;
        self.running = true;
    }

    /// Drops back to zero and stops; later ticks are ignored until `restart`.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.value = 0;
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let target = u64::from(self.target);
        let elapsed = u64::from(self.ticks) * u64::from(self.tick_ms);
        let duration = u64::from(self.duration_ms);

        if target * elapsed >= target * duration {
            self.value = self.target;
            self.running = false;
            return TickOutcome::Finished;
        }

        let progressed = (target * elapsed).div_ceil(duration);
        self.value = progressed.min(target) as u32;
        TickOutcome::Running
    }
}
