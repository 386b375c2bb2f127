use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use pizzashop_payments::Payment;

use super::r#trait::{PaymentRepository, RepositoryError};
use crate::text_file::read_records;

/// Payment log kept in a plain text file, one `table,TYPE,amount` line per
/// payment.
///
/// Every call goes to disk: `add` appends a line, `all` re-reads the file.
/// A file that does not exist yet is an empty log.
#[derive(Debug, Clone)]
pub struct FilePaymentRepository {
    path: PathBuf,
}

impl FilePaymentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PaymentRepository for FilePaymentRepository {
    fn add(&self, payment: Payment) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        writeln!(file, "{payment}").map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), %payment, "payment appended");
        Ok(())
    }

    fn all(&self) -> Vec<Payment> {
        match read_records(&self.path, Payment::parse_record) {
            Ok(payments) => payments,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "payment log not created yet");
                vec![]
            }
            Err(err) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to open payment log"
                );
                vec![]
            }
        }
    }
}
