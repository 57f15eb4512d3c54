/// The delay and sound timers. Both count down towards zero, one decrement
/// per tick, and never wrap below zero. Ticks are driven by the host at a
/// fixed 60 Hz; the interpreter itself never moves the timers, no matter
/// how many instructions execute between two ticks.
pub struct TimerBank {
    pub(super) delay: u8,
    pub(super) sound: u8,
}

impl TimerBank {
    pub fn new() -> Self {
        TimerBank { delay: 0, sound: 0 }
    }

    /// Decrements both timers once. Returns true when the sound timer just
    /// transitioned from 1 to 0, i.e. the tone the host plays should end.
    pub fn tick(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
        }

        if self.sound > 0 {
            self.sound -= 1;
            return self.sound == 0;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_saturate_at_zero() {
        let mut timers = TimerBank::new();
        assert!(!timers.tick());
        assert_eq!(timers.delay, 0);
        assert_eq!(timers.sound, 0);
    }

    #[test]
    fn test_delay_counts_down() {
        let mut timers = TimerBank::new();
        timers.delay = 3;
        timers.tick();
        timers.tick();
        assert_eq!(timers.delay, 1);
    }

    #[test]
    fn test_tone_end_fires_once() {
        let mut timers = TimerBank::new();
        timers.sound = 2;
        assert!(!timers.tick());
        assert!(timers.tick());
        assert!(!timers.tick());
    }
}
