// netify-core/src/application/instructions.rs
//
// The bulk load itself runs in psql; this only tells the operator how.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::config::DOWNSTREAM_TABLE;
use crate::domain::record::OUTPUT_HEADER;
use crate::infrastructure::csv::DELIMITER;

pub const LOAD_SCRIPT: &str = "insert-data.sql";
pub const DATABASE: &str = "ethanol";
pub const DATABASE_USER: &str = "postgres";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadInstructions {
    pub table: &'static str,
    pub output: PathBuf,
}

impl LoadInstructions {
    pub fn new(output: &Path) -> Self {
        Self {
            table: DOWNSTREAM_TABLE,
            output: output.to_path_buf(),
        }
    }

    /// Full-replace semantics: the table is emptied before the import.
    pub fn delete_statement(&self) -> String {
        format!("DELETE FROM {};", self.table)
    }

    pub fn copy_command(&self) -> String {
        format!(
            "\\COPY {} ({}) FROM {} WITH DELIMITER '{}' CSV HEADER;",
            self.table,
            OUTPUT_HEADER.join(","),
            self.output.display(),
            char::from(DELIMITER)
        )
    }

    pub fn script_command(&self) -> String {
        format!("psql -U {} -d {} -f {}", DATABASE_USER, DATABASE, LOAD_SCRIPT)
    }
}

impl fmt::Display for LoadInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To delete obsolete data execute the delete command in psql:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.delete_statement())?;
        writeln!(f)?;
        writeln!(
            f,
            "To insert the data execute the following command in the connected psql:"
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.copy_command())?;
        writeln!(f)?;
        writeln!(f, "... or simply use the {} script:", LOAD_SCRIPT)?;
        writeln!(f)?;
        write!(f, "{}", self.script_command())
    }
}
