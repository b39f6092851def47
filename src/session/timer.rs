/// Tick-driven countdown. The host delivers one `tick` per wake-up; the
/// countdown never schedules anything itself, which keeps every transition
/// a synchronous reaction to a discrete event.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(&mut self, secs: u32) {
        self.remaining = secs;
        self.running = secs > 0;
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    /// One decrement-and-check event. Returns true exactly once, on the tick
    /// that reaches zero; the countdown stops itself afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
