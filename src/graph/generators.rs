use crate::config::{GeneratorConfig, WeightRange};
use crate::graph::{DenseGraph, Graph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use rand::distributions::Uniform;
use rand::prelude::*;
use std::fmt::Debug;

/// Random undirected graph generator driven by an injected random source
///
/// Every unordered pair `(i, j)` with `i < j` is visited exactly once. The pair
/// becomes an edge with probability `density`, and a present edge gets a weight
/// drawn uniformly from the configured weight range.
#[derive(Debug)]
pub struct RandomGraphGenerator<R: Rng> {
    rng: R,
}

impl RandomGraphGenerator<StdRng> {
    /// Creates a generator whose output is fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomGraphGenerator<R> {
    pub fn new(rng: R) -> Self {
        RandomGraphGenerator { rng }
    }

    /// Generates a graph with `node_count` nodes and the given edge density
    pub fn generate<W>(
        &mut self,
        node_count: usize,
        density: f64,
        weight_range: WeightRange,
    ) -> Result<DenseGraph<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        if node_count == 0 {
            return Err(Error::InvalidSize(node_count));
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidParameter(format!(
                "density {} is outside [0, 1]",
                density
            )));
        }
        weight_range.validate()?;
        let distances = Uniform::new_inclusive(weight_range.min, weight_range.max);

        let mut graph = DenseGraph::new(node_count)?;
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if !self.rng.gen_bool(density) {
                    continue;
                }
                let distance = self.rng.sample(&distances);
                let weight = W::from(distance).ok_or_else(|| {
                    Error::InvalidParameter(format!("weight {} is not representable", distance))
                })?;
                graph.set_edge(i, j, weight)?;
            }
        }

        log::debug!(
            "generated graph: {} nodes, density {}, weights [{}, {}], {} edges",
            node_count,
            density,
            weight_range.min,
            weight_range.max,
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Generates a graph from a [`GeneratorConfig`], ignoring its seed
    pub fn generate_from_config<W>(&mut self, config: &GeneratorConfig) -> Result<DenseGraph<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        self.generate(config.node_count, config.density, config.weight_range)
    }
}

/// Generates a graph from `config`, seeding from `config.seed` when present and
/// from system entropy otherwise
pub fn generate_random_graph<W>(config: &GeneratorConfig) -> Result<DenseGraph<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let mut generator = match config.seed {
        Some(seed) => RandomGraphGenerator::seeded(seed),
        None => RandomGraphGenerator::from_entropy(),
    };
    generator.generate_from_config(config)
}
