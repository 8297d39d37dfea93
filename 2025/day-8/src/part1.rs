use miette::*;

use crate::engine::{cluster_brute_force, cluster_with_index, DEFAULT_CONNECTIONS};
use crate::parser::parse_points;

/// Product of the three largest circuits after the 1000 closest connections.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with_connections(input, DEFAULT_CONNECTIONS)
}

#[tracing::instrument(skip(input))]
pub fn process_with_connections(input: &str, connections: usize) -> Result<String> {
    let points = parse_points(input)?;
    let outcome = cluster_brute_force(&points, connections);
    Ok(outcome.top_three_product.to_string())
}

/// Same answer as [`process`], using the k-d tree candidate edges.
#[tracing::instrument(skip(input))]
pub fn process_with_index(input: &str, connections: usize) -> Result<String> {
    let points = parse_points(input)?;
    Ok(cluster_with_index(&points, connections).to_string())
}
