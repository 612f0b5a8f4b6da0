use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a `mode,amount` batch file with the given rows.
pub fn payments_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["mode", "amount"])?;
        for (mode, amount) in rows {
            wtr.write_record([mode, amount])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
