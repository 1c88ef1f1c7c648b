//! Plain-text instance reader.
//!
//! Layout: the node count `n`, the median count `p`, then `n` rows of `n`
//! whitespace-separated distances. Blank lines are ignored.

use std::path::Path;
use std::str::FromStr;

use crate::distance::DistanceMatrix;
use crate::error::{PMedianError, Result};
use crate::models::Instance;

/// Parses an instance from its text form.
///
/// # Errors
///
/// [`PMedianError::MalformedInstance`] for a bad header, a row of the wrong
/// width, a missing row, a non-numeric or negative distance, or trailing
/// content. [`PMedianError::InvalidMedianCount`] if `p` is not in `1..=n`.
///
/// # Examples
///
/// ```
/// use u_pmedian::io::parse_instance;
///
/// let text = "3\n1\n0 2 5\n2 0 4\n5 4 0\n";
/// let instance = parse_instance(text).expect("well formed");
/// assert_eq!(instance.num_nodes(), 3);
/// assert_eq!(instance.num_medians(), 1);
/// assert_eq!(instance.distances().get(2, 1), 4.0);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance> {
    let end = text.lines().count() + 1;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, raw) = lines
        .next()
        .ok_or_else(|| PMedianError::malformed(end, "missing node count"))?;
    let n: usize = parse_header(line, raw, "node count")?;
    if n.checked_mul(n).is_none() {
        return Err(PMedianError::malformed(line, "node count too large"));
    }

    let (line, raw) = lines
        .next()
        .ok_or_else(|| PMedianError::malformed(end, "missing median count"))?;
    let p: i64 = parse_header(line, raw, "median count")?;
    if p <= 0 || p as u64 > n as u64 {
        return Err(PMedianError::InvalidMedianCount { p, n });
    }

    let mut data = Vec::new();
    for row in 0..n {
        let (line, raw) = lines.next().ok_or_else(|| {
            PMedianError::malformed(end, format!("expected {n} matrix rows, found {row}"))
        })?;
        let start = data.len();
        for token in raw.split_whitespace() {
            data.push(parse_distance(line, token)?);
        }
        let count = data.len() - start;
        if count != n {
            return Err(PMedianError::malformed(
                line,
                format!("expected {n} values, found {count}"),
            ));
        }
    }

    if let Some((line, _)) = lines.next() {
        return Err(PMedianError::malformed(
            line,
            "unexpected content after the distance matrix",
        ));
    }

    let distances = DistanceMatrix::from_data(n, data)
        .ok_or_else(|| PMedianError::malformed(end, "distance matrix is not square"))?;
    Instance::new(distances, p as usize)
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}

fn parse_header<T: FromStr>(line: usize, raw: &str, what: &str) -> Result<T> {
    raw.parse().map_err(|_| {
        PMedianError::malformed(line, format!("{what} must be a single integer, found `{raw}`"))
    })
}

fn parse_distance(line: usize, token: &str) -> Result<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| PMedianError::malformed(line, format!("`{token}` is not a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PMedianError::malformed(
            line,
            format!("distances must be finite and non-negative, found `{token}`"),
        ));
    }
    Ok(value)
}
