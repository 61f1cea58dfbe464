use std::ops::Mul;

use crate::quantity::{percent::Percent, time::Days};

quantity!(PercentPerDay, suffix: "%/d", precision: 2);

impl Mul<Days> for PercentPerDay {
    type Output = Percent;

    fn mul(self, rhs: Days) -> Self::Output {
        Percent(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn mul_days_ok() {
        assert_eq!(PercentPerDay(0.1) * Days(10.0), Percent(1.0));
    }

    #[test]
    fn mul_fractional_days_ok() {
        assert_abs_diff_eq!((PercentPerDay(0.5) * Days(7.3)).0, 3.65, epsilon = 1e-9);
    }
}
