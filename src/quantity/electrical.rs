quantity!(Volts, suffix: "V", precision: 1);

quantity!(Milliohms, suffix: "mΩ", precision: 0);

quantity!(MilliampereHours, suffix: "mAh", precision: 0);

impl Volts {
    pub const ZERO: Self = Self(0.0);
}

impl Milliohms {
    pub const ZERO: Self = Self(0.0);
}

impl MilliampereHours {
    pub const ZERO: Self = Self(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ok() {
        assert_eq!(Volts(3.7).to_string(), "3.7V");
        assert_eq!(Milliohms(12.0).to_string(), "12mΩ");
        assert_eq!(MilliampereHours(3000.0).to_string(), "3000mAh");
    }

    #[test]
    fn sum_ok() {
        let total: MilliampereHours =
            [MilliampereHours(3000.0), MilliampereHours(2500.0)].into_iter().sum();
        assert_eq!(total, MilliampereHours(5500.0));
    }
}
