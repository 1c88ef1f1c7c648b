//! Plain-text instance writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::Instance;

/// Writes an instance in the layout read by
/// [`parse_instance`](super::parse_instance).
///
/// Whole-number distances are written without a fractional part.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::DistanceMatrix;
/// use u_pmedian::io::write_instance;
/// use u_pmedian::models::Instance;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.5, 0.0]).expect("square");
/// let instance = Instance::new(dm, 1).expect("valid p");
///
/// let mut out = Vec::new();
/// write_instance(&instance, &mut out).expect("in-memory write");
/// assert_eq!(String::from_utf8(out).unwrap(), "2\n1\n0 3\n3.5 0\n");
/// ```
pub fn write_instance<W: Write>(instance: &Instance, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", instance.num_nodes())?;
    writeln!(writer, "{}", instance.num_medians())?;
    for row in instance.distances().rows() {
        let line = row
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes an instance to a file, replacing any existing content.
pub fn save_instance(instance: &Instance, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_instance(instance, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::io::parse_instance;

    #[test]
    fn test_write_then_parse() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.25, 7.0],
            vec![1.25, 0.0, 2.0],
            vec![7.0, 2.0, 0.0],
        ])
        .expect("valid");
        let instance = Instance::new(dm, 2).expect("valid");

        let mut out = Vec::new();
        write_instance(&instance, &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "3\n2\n0 1.25 7\n1.25 0 2\n7 2 0\n");

        let back = parse_instance(&text).expect("parse");
        assert_eq!(back.num_medians(), 2);
        assert_eq!(back.distances(), instance.distances());
    }
}
