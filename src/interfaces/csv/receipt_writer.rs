use crate::domain::payment::Receipt;
use crate::error::Result;
use std::io::Write;

/// Output encoding for receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReceiptFormat {
    /// `mode,amount,confirmation` with a header row.
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// Writes receipts to any `Write` sink in the chosen [`ReceiptFormat`].
pub struct ReceiptWriter<W: Write> {
    inner: Inner<W>,
}

enum Inner<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W, format: ReceiptFormat) -> Self {
        let inner = match format {
            ReceiptFormat::Csv => Inner::Csv(csv::Writer::from_writer(sink)),
            ReceiptFormat::Json => Inner::Json(sink),
        };
        Self { inner }
    }

    pub fn write(&mut self, receipt: &Receipt) -> Result<()> {
        match &mut self.inner {
            Inner::Csv(writer) => writer.serialize(receipt)?,
            Inner::Json(sink) => {
                serde_json::to_writer(&mut *sink, receipt)?;
                writeln!(sink)?;
            }
        }
        Ok(())
    }

    /// Writes every receipt, then flushes the sink.
    pub fn write_all<'a>(&mut self, receipts: impl IntoIterator<Item = &'a Receipt>) -> Result<()> {
        for receipt in receipts {
            self.write(receipt)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.inner {
            Inner::Csv(writer) => writer.flush()?,
            Inner::Json(sink) => sink.flush()?,
        }
        Ok(())
    }
}
