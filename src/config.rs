/*
 * This module contains some quality of life structs and aliases. Most
 * importantly, it contains the `EvalConfig` struct, which implements the
 * Default trait. This config can be passed to the `f_measure_conf` function
 * to simplify its arguments.
*/
use crate::metrics::FloatExt;
use num::NumCast;
use std::fmt::Display;

/// Default matching window, in seconds.
pub const DEFAULT_WINDOW: f64 = 0.05;

/// Reasonable default configuration for onset evaluation.
pub type DefaultEvalConfig = EvalConfig<f64>;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Config struct used to simplify the inputs of parameters to the main
/// functions of `onsev`. It implements the Default trait.
pub struct EvalConfig<F: FloatExt> {
    /// Maximum time difference, in seconds, for a reference and an estimated
    /// onset to count as a hit.
    window: F,
    /// Beta parameter of the f-score. `beta = 1` for F1.
    beta: F,
}

impl<F: FloatExt> EvalConfig<F> {
    pub fn new(window: F, beta: F) -> Self {
        EvalConfig { window, beta }
    }
    pub fn window(&self) -> F {
        self.window
    }
    pub fn beta(&self) -> F {
        self.beta
    }
}

impl<F: FloatExt> Default for EvalConfig<F> {
    fn default() -> Self {
        EvalConfig {
            window: <F as NumCast>::from(DEFAULT_WINDOW)
                .expect("the default window is representable in any float type"),
            beta: F::one(),
        }
    }
}

impl<F: FloatExt> From<EvalConfig<F>> for (F, F) {
    fn from(value: EvalConfig<F>) -> Self {
        (value.window, value.beta)
    }
}

impl<F: FloatExt> Display for EvalConfig<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Matching window in seconds: {}\n Beta parameter of the f-score: {}",
            self.window, self.beta
        )
    }
}

/// This builder can be used to build and customize an `EvalConfig`
/// structure.
pub struct EvalConfigBuilder<F: FloatExt> {
    window: Option<F>,
    beta: Option<F>,
}

impl<F: FloatExt> Default for EvalConfigBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FloatExt> EvalConfigBuilder<F> {
    pub fn new() -> Self {
        EvalConfigBuilder {
            window: None,
            beta: None,
        }
    }
    pub fn window(mut self, window: F) -> Self {
        self.window = Some(window);
        self
    }
    pub fn beta(mut self, beta: F) -> Self {
        self.beta = Some(beta);
        self
    }
    pub fn build(self) -> EvalConfig<F> {
        let defaults = EvalConfig::default();
        EvalConfig {
            window: self.window.unwrap_or(defaults.window),
            beta: self.beta.unwrap_or(defaults.beta),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = DefaultEvalConfig::default();
        assert_eq!(config.window(), DEFAULT_WINDOW);
        assert_eq!(config.beta(), 1.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.05)]
    #[case(0.5)]
    fn test_builder_setters_window(#[case] window: f64) {
        let builder = EvalConfigBuilder::default();
        let config = builder.window(window).build();
        assert_eq!(config.window(), window);
        assert_eq!(config.beta(), 1.0);
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(2.0)]
    fn test_builder_setters_beta(#[case] beta: f64) {
        let builder = EvalConfigBuilder::default();
        let config = builder.beta(beta).build();
        assert_eq!(config.beta(), beta);
        assert_eq!(config.window(), DEFAULT_WINDOW);
    }

    #[test]
    fn test_config_destructures_into_a_tuple() {
        let config = EvalConfig::new(0.07, 0.5);
        let (window, beta) = config.into();
        assert_eq!(window, 0.07);
        assert_eq!(beta, 0.5);
    }
}
