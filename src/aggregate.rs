use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::ResultSet;
use crate::{Error, Result};

/// Mean shortest-path length from the origin to every other settled node
///
/// Unreachable nodes are never settled and so take no part in the sum or the
/// count. A result holding only the origin has nothing to average and yields
/// [`Error::NoReachableNodes`].
pub fn average_distance<W>(result: &ResultSet<W>) -> Result<W>
where
    W: Float + Zero + Debug + Copy,
{
    let origin = result.origin();
    let (sum, count) = result
        .iter()
        .filter(|entry| entry.node != origin)
        .fold((W::zero(), 0usize), |(sum, count), entry| {
            (sum + entry.distance, count + 1)
        });

    if count == 0 {
        return Err(Error::NoReachableNodes);
    }

    let count = W::from(count)
        .ok_or_else(|| Error::InvalidParameter(format!("count {} is not representable", count)))?;
    Ok(sum / count)
}

/// Reachability and distance statistics for one result set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSummary<W> {
    /// Nodes other than the origin with a path from it
    pub reachable: usize,
    /// Nodes with no path from the origin
    pub unreachable: usize,
    /// `None` when nothing besides the origin is reachable
    pub mean: Option<W>,
    pub max: Option<W>,
}

pub fn summarize<W>(result: &ResultSet<W>) -> PathSummary<W>
where
    W: Float + Zero + Debug + Copy,
{
    let origin = result.origin();
    let reachable = result.len() - 1;
    let max = result
        .iter()
        .filter(|entry| entry.node != origin)
        .map(|entry| entry.distance)
        .fold(None, |max: Option<W>, d| Some(max.map_or(d, |m| m.max(d))));

    PathSummary {
        reachable,
        unreachable: result.node_count() - result.len(),
        mean: average_distance(result).ok(),
        max,
    }
}

/// Mean of per-graph averages, or `None` for an empty batch
pub fn mean_of_averages(averages: &[f64]) -> Option<f64> {
    if averages.is_empty() {
        return None;
    }
    Some(averages.iter().sum::<f64>() / averages.len() as f64)
}
