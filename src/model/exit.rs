use std::time::{Duration, Instant};

/// Detects the "drag past the newest day" gesture and, after a grace delay,
/// signals the host to leave timeline mode.
///
/// The delay is a deadline polled from the frame loop rather than a spawned
/// timer, so a torn-down control can never receive a stale callback: once
/// the gate is dropped or disarmed, nothing fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitGate {
    #[default]
    Idle,
    Armed {
        deadline: Instant,
    },
    Fired,
}

impl ExitGate {
    /// Arm the gate. Re-arming while already armed keeps the original
    /// deadline, so a sustained overdrag fires exactly once.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        if *self == ExitGate::Idle {
            *self = ExitGate::Armed { deadline: now + delay };
        }
    }

    /// Poll from the frame loop; returns `true` exactly once, when the
    /// armed deadline has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let ExitGate::Armed { deadline } = *self {
            if now >= deadline {
                *self = ExitGate::Fired;
                return true;
            }
        }
        false
    }

    /// Drop any pending deadline (mode exit / teardown).
    pub fn disarm(&mut self) {
        *self = ExitGate::Idle;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, ExitGate::Armed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn fires_exactly_once_after_delay() {
        let t0 = Instant::now();
        let mut gate = ExitGate::default();
        gate.arm(t0, DELAY);

        assert!(!gate.poll(t0 + Duration::from_millis(999)));
        assert!(gate.poll(t0 + Duration::from_millis(1000)));
        // Already fired; later polls stay quiet.
        assert!(!gate.poll(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn rearming_keeps_the_original_deadline() {
        let t0 = Instant::now();
        let mut gate = ExitGate::default();
        gate.arm(t0, DELAY);
        // Qualifying drag updates keep arriving while armed.
        gate.arm(t0 + Duration::from_millis(900), DELAY);
        assert!(gate.poll(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn disarm_kills_a_pending_deadline() {
        let t0 = Instant::now();
        let mut gate = ExitGate::default();
        gate.arm(t0, DELAY);
        gate.disarm();
        assert!(!gate.poll(t0 + Duration::from_millis(2000)));
        assert_eq!(gate, ExitGate::Idle);
    }

    #[test]
    fn unarmed_gate_never_fires() {
        let mut gate = ExitGate::default();
        assert!(!gate.poll(Instant::now() + Duration::from_secs(10)));
    }
}
