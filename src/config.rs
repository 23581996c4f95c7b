use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Closed interval `[min, max]` that random edge weights are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl WeightRange {
    pub fn new(min: f64, max: f64) -> Self {
        WeightRange { min, max }
    }

    /// Checks that `0 < min <= max`, both bounds are finite and the width of the
    /// range can be sampled without overflowing
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "weight range [{}, {}] must be finite",
                self.min, self.max
            )));
        }
        if self.min <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "minimum weight {} must be positive",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(Error::InvalidParameter(format!(
                "minimum weight {} exceeds maximum weight {}",
                self.min, self.max
            )));
        }
        // Uniform sampling scales the width by just under 1.0
        if !((self.max - self.min) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(Error::InvalidParameter(format!(
                "weight range [{}, {}] is too wide to sample",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        WeightRange { min: 1.0, max: 10.0 }
    }
}

/// Parameters for one randomly generated graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub node_count: usize,
    /// Probability that any given unordered node pair is connected
    pub density: f64,
    pub weight_range: WeightRange,
    /// Fixed seed for reproducible graphs; `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 50,
            density: 0.2,
            weight_range: WeightRange::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(node_count: usize, density: f64) -> Self {
        Self {
            node_count,
            density,
            ..Default::default()
        }
    }

    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.weight_range = WeightRange::new(min, max);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(Error::InvalidSize(self.node_count));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidParameter(format!(
                "density {} is outside [0, 1]",
                self.density
            )));
        }
        self.weight_range.validate()
    }
}

/// A batch of random graphs to evaluate from a single origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub origin: usize,
    /// Number of graphs generated per entry in `graphs`
    pub trials: usize,
    pub graphs: Vec<GeneratorConfig>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            origin: 0,
            trials: 1,
            graphs: vec![GeneratorConfig::new(50, 0.2), GeneratorConfig::new(50, 0.4)],
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RunConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidParameter("trials must be at least 1".to_string()));
        }
        for graph in &self.graphs {
            graph.validate()?;
            if self.origin >= graph.node_count {
                return Err(Error::InvalidVertex(self.origin));
            }
        }
        Ok(())
    }
}

/// Command-line style overrides layered on top of a [`RunConfig`]
///
/// Every set field replaces the corresponding value of the base run, whatever
/// order the flags were given in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOverrides {
    /// JSON run file used as the base; the default run otherwise
    pub config_path: Option<PathBuf>,
    pub trials: Option<usize>,
    pub origin: Option<usize>,
    /// Replaces the whole list of graphs with this one
    pub graph: Option<GeneratorConfig>,
}

impl RunOverrides {
    /// Loads the base run, applies the overrides and validates the result
    pub fn resolve(self) -> Result<RunConfig> {
        let mut run = match &self.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
                serde_json::from_str::<RunConfig>(&json).map_err(|e| Error::Config(e.to_string()))?
            }
            None => RunConfig::default(),
        };

        if let Some(trials) = self.trials {
            run.trials = trials;
        }
        if let Some(origin) = self.origin {
            run.origin = origin;
        }
        if let Some(graph) = self.graph {
            run.graphs = vec![graph];
        }

        run.validate()?;
        Ok(run)
    }
}
