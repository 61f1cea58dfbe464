quantity!(Percent, suffix: "%", precision: 1);

impl Percent {
    pub const ZERO: Self = Self(0.0);

    pub const FULL: Self = Self(100.0);

    /// Round to two decimal places, the precision at which charge levels are persisted.
    #[must_use]
    pub fn round_2(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
