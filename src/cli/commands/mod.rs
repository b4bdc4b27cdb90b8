//! CLI command implementations
//!
//! Every command returns a process exit code:
//! `0` success, `1` the run produced an `{error}` outcome,
//! `2` configuration error, `5` fatal error.

pub mod init;
pub mod invoke;
pub mod run;
pub mod validate;

use crate::core::pipeline::PipelineOutcome;
use std::io::Write;

/// Exit code for a run whose outcome is an error
pub const EXIT_OUTCOME_ERROR: i32 = 1;
/// Exit code for configuration problems
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code for unexpected failures
pub const EXIT_FATAL: i32 = 5;

/// Print the outcome JSON to stdout and map it to an exit code
pub(crate) fn print_outcome(outcome: &PipelineOutcome, pretty: bool) -> anyhow::Result<i32> {
    write_outcome(&mut std::io::stdout(), outcome, pretty)
}

/// Write the outcome JSON as one document to `out`
pub(crate) fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &PipelineOutcome,
    pretty: bool,
) -> anyhow::Result<i32> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, outcome)?;
    } else {
        serde_json::to_writer(&mut *out, outcome)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(if outcome.is_error() {
        EXIT_OUTCOME_ERROR
    } else {
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_outcome_exit_codes() {
        let mut out = Vec::new();
        let code = write_outcome(&mut out, &PipelineOutcome::error("No states found"), false).unwrap();
        assert_eq!(code, EXIT_OUTCOME_ERROR);
        assert_eq!(String::from_utf8(out).unwrap(), "{\"error\":\"No states found\"}\n");

        let mut out = Vec::new();
        let code = write_outcome(&mut out, &PipelineOutcome::messages(Vec::new()), true).unwrap();
        assert_eq!(code, 0);
        assert!(String::from_utf8(out).unwrap().contains("\"messages\": []"));
    }
}
