use miette::*;

use crate::engine::{cluster_brute_force, DEFAULT_CONNECTIONS};
use crate::parser::parse_points;

/// Product of the x-coordinates of the last two boxes joined into the single circuit.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    if points.len() < 2 {
        return Ok("0".to_string());
    }

    let outcome = cluster_brute_force(&points, DEFAULT_CONNECTIONS);
    outcome
        .final_merge_x_product
        .map(|product| product.to_string())
        .ok_or_else(|| miette!("Graph could not be fully connected"))
}
