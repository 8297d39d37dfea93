use chumsky::prelude::*;
use miette::*;

use crate::point::{Point, MAX_COORD};

/// Parses `x,y,z` lines into points. Blank and whitespace-only lines are skipped.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            let value = digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, e))?;
            if value.unsigned_abs() > MAX_COORD.unsigned_abs() {
                return Err(Rich::custom(
                    span,
                    format!("coordinate {value} is outside ±{MAX_COORD}"),
                ));
            }
            Ok(value)
        })
        .padded_by(text::inline_whitespace());

    let point = coord
        .clone()
        .then_ignore(just(','))
        .then(coord.clone())
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| Point::new(x, y, z));

    let line_break = text::inline_whitespace().then(text::newline());

    point
        .separated_by(line_break.repeated().at_least(1))
        .allow_leading()
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

/// Parses the puzzle input, reporting every failure as a labeled span.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    parser().parse(input).into_result().map_err(|errors| {
        let labels = errors
            .iter()
            .map(|e| LabeledSpan::at(e.span().start..e.span().end, e.to_string()))
            .collect::<Vec<_>>();
        miette!(labels = labels, "Parse failed with {} error(s)", errors.len())
            .with_source_code(input.to_string())
    })
}
