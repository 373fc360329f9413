use crate::error::Result;
use crate::models::BatchResult;

/// Serializes a batch to CSV: one header row, one row per candidate,
/// already in rank order.
pub fn to_csv(result: &BatchResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Filename", "Score", "Verdict", "Feedback"])?;

    for row in &result.rows {
        writer.write_record([
            row.filename.clone(),
            format!("{:.2}", row.score),
            row.verdict.to_string(),
            row.feedback.summary(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
