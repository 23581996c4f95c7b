//! Plain-text rendering of graphs and shortest-path results.
//!
//! Everything here goes through the public read API of the graph and result
//! types; nothing in the core depends on this module.

use std::fmt::{self, Debug, Display, Formatter};
use num_traits::{Float, Zero};

use crate::aggregate::summarize;
use crate::algorithm::ResultSet;
use crate::graph::Graph;

/// Matrix columns printed per page
pub const COLUMNS_PER_PAGE: usize = 15;

/// Renders the 0/1 connectivity matrix, paginated by [`COLUMNS_PER_PAGE`]
pub fn connectivity_matrix<W, G>(graph: &G) -> String
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    Matrix {
        title: "Connectivity Matrix",
        size: graph.vertex_count(),
        cell: |row: usize, column: usize| {
            let present = graph.has_edge(row, column);
            (if present { "1" } else { "0" }).to_string()
        },
    }
    .to_string()
}

/// Renders the edge weight matrix, paginated by [`COLUMNS_PER_PAGE`]; absent edges print as 0
pub fn distance_matrix<W, G>(graph: &G) -> String
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    Matrix {
        title: "Distance Matrix",
        size: graph.vertex_count(),
        cell: |row: usize, column: usize| {
            match graph.edge_weight(row, column).and_then(|w| w.to_f64()) {
                Some(weight) => format!("{:.1}", weight),
                None => "0".to_string(),
            }
        },
    }
    .to_string()
}

/// Renders settled nodes in finalization order followed by a one-line summary
pub fn result_table<W>(result: &ResultSet<W>) -> String
where
    W: Float + Zero + Debug + Copy,
{
    ResultTable(result).to_string()
}

/// Display adapter for a result set, see [`result_table`]
pub struct ResultTable<'a, W>(pub &'a ResultSet<W>)
where
    W: Float + Zero + Debug + Copy;

impl<W> Display for ResultTable<'_, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6} | {:>10} | {:>6}", "node", "distance", "via")?;
        for entry in self.0 {
            let via = entry
                .predecessor
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            writeln!(
                f,
                "{:>6} | {:>10.2} | {:>6}",
                entry.node,
                entry.distance.to_f64().unwrap_or(f64::NAN),
                via
            )?;
        }

        let summary = summarize(self.0);
        write!(
            f,
            "reachable: {}, unreachable: {}",
            summary.reachable, summary.unreachable
        )?;
        match summary.mean.and_then(|m| m.to_f64()) {
            Some(mean) => writeln!(f, ", average distance: {:.4}", mean),
            None => writeln!(f, ", average distance: n/a"),
        }
    }
}

struct Matrix<F> {
    title: &'static str,
    size: usize,
    cell: F,
}

impl<F> Display for Matrix<F>
where
    F: Fn(usize, usize) -> String,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-^64}", format!(" {} ", self.title))?;

        let pages = ((self.size + COLUMNS_PER_PAGE - 1) / COLUMNS_PER_PAGE).max(1);
        for page in 0..pages {
            let start = page * COLUMNS_PER_PAGE;
            let end = ((page + 1) * COLUMNS_PER_PAGE).min(self.size);
            writeln!(f, "{:-^64}", format!(" Index {} - {} ", start, end))?;

            for row in 0..self.size {
                write!(f, "{:>3} |", row)?;
                for column in start..end {
                    write!(f, " {} |", (self.cell)(row, column))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
