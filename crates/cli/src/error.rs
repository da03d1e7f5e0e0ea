//! Errors surfaced by the binary and the exit status each one maps to.

use menu_client::FetchError;
use menu_data::MenuError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a failed request or a non-2xx response
pub const EXIT_FETCH: u8 = 1;
/// Exit status for a body that is neither JSON nor XML
pub const EXIT_FORMAT: u8 = 2;
/// Exit status for rejected arguments
pub const EXIT_INVALID_INPUT: u8 = 3;
/// Exit status for failures writing the output files
pub const EXIT_OUTPUT: u8 = 4;
/// Exit status for a filter stage that failed
pub const EXIT_PIPELINE: u8 = 5;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Could not parse response: {0}")]
    Format(#[source] MenuError),

    #[error(transparent)]
    InvalidInput(MenuError),

    #[error("Failed to write {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Fetch(_) => EXIT_FETCH,
            CliError::Format(_) => EXIT_FORMAT,
            CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            CliError::Output { .. } => EXIT_OUTPUT,
            CliError::Pipeline(_) => EXIT_PIPELINE,
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Output { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let format = CliError::Format(MenuError::UnrecognizedFormat {
            json: "x".to_string(),
            xml: "y".to_string(),
        });
        let input = CliError::InvalidInput(MenuError::InvalidInput {
            field: "days".to_string(),
            value: "0".to_string(),
        });
        let fetch = CliError::Fetch(FetchError::Status {
            status: 500,
            body: String::new(),
        });

        let output = CliError::Output {
            path: PathBuf::from("menu.csv"),
            source: std::io::Error::other("disk full"),
        };
        let pipeline = CliError::Pipeline(anyhow::anyhow!("filter failed"));

        let codes = [&fetch, &format, &input, &output, &pipeline].map(CliError::exit_code);
        assert_eq!(codes, [EXIT_FETCH, EXIT_FORMAT, EXIT_INVALID_INPUT, EXIT_OUTPUT, EXIT_PIPELINE]);
        let mut unique = codes.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());

        assert_eq!(fetch.exit_code(), EXIT_FETCH);
        assert_eq!(format.exit_code(), EXIT_FORMAT);
        assert_eq!(input.exit_code(), EXIT_INVALID_INPUT);
        assert!(format.to_string().starts_with("Could not parse response"));
        assert_eq!(input.to_string(), "Invalid value for days: 0");
    }
}
