quantity!(
    /// Rate in percent, `20` meaning 20 %.
    Percent, via: f64, suffix: "%"
);

impl Percent {
    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn to_proportion_ok() {
        assert_abs_diff_eq!(Percent(20.0).to_proportion(), 0.2);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Percent(20.0).to_string(), "20%");
    }
}
