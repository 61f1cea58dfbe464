use chrono::TimeDelta;

quantity!(Days, suffix: "d", precision: 1);

impl From<TimeDelta> for Days {
    fn from(time_delta: TimeDelta) -> Self {
        Self(time_delta.as_seconds_f64() / 86_400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_time_delta_ok() {
        assert_eq!(Days::from(TimeDelta::hours(36)), Days(1.5));
        assert_eq!(Days::from(TimeDelta::zero()), Days(0.0));
    }
}
