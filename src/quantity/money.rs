use std::ops::Mul;

quantity!(
    /// Amount in pounds sterling, possibly fractional.
    Pounds, via: f64, prefix: "£"
);

quantity!(
    /// Amount in whole pounds, as displayed to the customer.
    WholePounds, via: u64, prefix: "£"
);

impl Mul<f64> for Pounds {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<WholePounds> for Pounds {
    #[expect(clippy::cast_precision_loss)]
    fn from(value: WholePounds) -> Self {
        Self(value.0 as f64)
    }
}

impl Pounds {
    /// Largest amount whose whole pounds are all representable, that is `2⁵³ - 1`.
    pub const MAX_EXACT: Self = Self(9_007_199_254_740_991.0);

    /// Round to the nearest whole pound, halves rounding up.
    ///
    /// Only amounts below [`Pounds::MAX_EXACT`] round exactly.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    pub fn round(self) -> WholePounds {
        debug_assert!(self >= Self::zero());
        debug_assert!(self <= Self::MAX_EXACT);
        WholePounds((self.0 + 0.5).floor() as u64)
    }
}

impl WholePounds {
    /// Scale the amount by the factor and round back to whole pounds.
    pub fn scale(self, factor: f64) -> Self {
        (Pounds::from(self) * factor).round()
    }
}
