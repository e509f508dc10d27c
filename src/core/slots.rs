use chrono::{Duration, NaiveTime};

/// Iterator over the formatted time slots of one entry's window.
///
/// Emits "HH:MM" strings from `start` to `end`, both endpoints inclusive.
/// A window with `start > end` yields nothing, and a step that would cross
/// midnight ends the sequence instead of wrapping around.
pub struct TimeSlots {
    current: Option<NaiveTime>,
    end: NaiveTime,
    step: Duration,
}

pub fn expand(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> TimeSlots {
    TimeSlots {
        current: (start <= end).then_some(start),
        end,
        step: Duration::minutes(i64::from(step_minutes)),
    }
}

impl Iterator for TimeSlots {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.current?;
        let slot = current.format("%H:%M").to_string();
        self.current = match current.overflowing_add_signed(self.step) {
            (next, 0) if next <= self.end => Some(next),
            _ => None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn one_minute_step_includes_both_endpoints() {
        let slots: Vec<String> = expand(t(9, 0), t(9, 5), 1).collect();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots.first().unwrap(), "09:00");
        assert_eq!(slots.last().unwrap(), "09:05");
    }

    #[test]
    fn slot_count_matches_window_length() {
        // (end - start in minutes) + 1 at step 1
        let slots: Vec<String> = expand(t(8, 30), t(10, 0), 1).collect();
        assert_eq!(slots.len(), 91);
    }

    #[test]
    fn start_after_end_is_empty() {
        assert_eq!(expand(t(10, 0), t(9, 0), 1).count(), 0);
    }

    #[test]
    fn start_equal_to_end_yields_one_slot() {
        let slots: Vec<String> = expand(t(12, 15), t(12, 15), 1).collect();
        assert_eq!(slots, vec!["12:15"]);
    }

    #[test]
    fn wider_steps_stop_at_the_last_reachable_slot() {
        let slots: Vec<String> = expand(t(10, 0), t(11, 0), 30).collect();
        assert_eq!(slots, vec!["10:00", "10:30", "11:00"]);

        let slots: Vec<String> = expand(t(9, 0), t(9, 5), 4).collect();
        assert_eq!(slots, vec!["09:00", "09:04"]);
    }

    #[test]
    fn sequence_ends_at_midnight_instead_of_wrapping() {
        let slots: Vec<String> = expand(t(23, 50), t(23, 59), 10).collect();
        assert_eq!(slots, vec!["23:50"]);
    }

    #[test]
    fn expansion_is_restartable() {
        let first: Vec<String> = expand(t(7, 0), t(7, 20), 5).collect();
        let second: Vec<String> = expand(t(7, 0), t(7, 20), 5).collect();
        assert_eq!(first, second);
    }
}
