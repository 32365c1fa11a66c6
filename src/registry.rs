/*!
Insertion-ordered registry mapping a human-readable metric name to its
evaluation function. The registry is built once at startup, pre-populated
with the built-in metrics, and only read afterwards; reporting tools iterate
it to discover the available metrics by name.
*/
use crate::config::DefaultEvalConfig;
use crate::metrics::{f_measure_with, ComputationError, Scores};
use ahash::HashMap as AHashMap;

/// Signature shared by every registered metric: a reference and an estimated
/// event sequence plus the evaluation parameters, yielding a score tuple.
pub type MetricFn =
    fn(&[f64], &[f64], &DefaultEvalConfig) -> Result<Scores<f64>, ComputationError>;

#[derive(Debug, Clone)]
/// Ordered collection of named metrics. Names come back in registration
/// order, so reports always list metrics the same way.
pub struct MetricRegistry {
    order: Vec<String>,
    table: AHashMap<String, MetricFn>,
}

impl MetricRegistry {
    /// Registry holding the built-in metrics under their conventional names.
    pub fn with_builtin_metrics() -> Self {
        let mut registry = Self::empty();
        registry.register("F-measure", f_measure_metric);
        registry
    }

    /// Registry with no metrics at all.
    pub fn empty() -> Self {
        MetricRegistry {
            order: Vec::new(),
            table: AHashMap::default(),
        }
    }

    /// Adds a metric under `name`, keeping registration order. Returns
    /// `false` and leaves the registry untouched when the name is already
    /// taken.
    pub fn register(&mut self, name: &str, metric: MetricFn) -> bool {
        if self.table.contains_key(name) {
            return false;
        }
        self.order.push(String::from(name));
        self.table.insert(String::from(name), metric);
        true
    }

    pub fn get(&self, name: &str) -> Option<MetricFn> {
        self.table.get(name).copied()
    }

    /// Iterates the metrics in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricFn)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.table.get(name).map(|metric| (name.as_str(), *metric)))
    }

    /// Iterates the metric names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::with_builtin_metrics()
    }
}

/// The built-in f-measure metric, window and beta taken from the config.
fn f_measure_metric(
    reference: &[f64],
    estimated: &[f64],
    config: &DefaultEvalConfig,
) -> Result<Scores<f64>, ComputationError> {
    f_measure_with(reference, estimated, config.window(), config.beta())
}
