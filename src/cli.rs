use crate::error::MigrateError;
use crate::migrate::{count_missing, migrate, DEFAULT_PATH};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::error;

/// Add an empty `description` field to every video in a course catalog
#[derive(Parser, Debug)]
#[command(name = "add-description-field", version)]
pub struct Args {
    /// Course catalog JSON file, rewritten in place
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Only report how many videos lack a description; do not write the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Parses a full argument list (program name first).
pub fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv)
}

/// Picks the catalog path out of a full argument list, falling back to
/// `course_data.json`.
pub fn resolve_path<I, T>(argv: I) -> Result<PathBuf, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_args(argv).map(|args| args.path)
}

/// Runs one migration and prints its status lines to `out`.
///
/// Returns the process exit code: 0 on success, 1 on any failure.
pub fn run<W: Write>(args: &Args, out: &mut W) -> io::Result<u8> {
    writeln!(out, "Processing {}...", args.path.display())?;

    let result = if args.dry_run {
        count_missing(&args.path)
    } else {
        migrate(&args.path)
    };

    match result {
        Ok(count) if args.dry_run => {
            writeln!(
                out,
                "{} video(s) lack a description field. Dry run, nothing written.",
                count
            )?;
            Ok(0)
        }
        Ok(count) => {
            writeln!(out, "Added a description field to {} video(s).", count)?;
            writeln!(out, "Done.")?;
            Ok(0)
        }
        Err(err) => {
            report(out, &err)?;
            writeln!(out, "Migration failed.")?;
            Ok(1)
        }
    }
}

fn report<W: Write>(out: &mut W, err: &MigrateError) -> io::Result<()> {
    let kind = match err {
        MigrateError::NotFound { .. } => "not found",
        MigrateError::Parse { .. } => "parse error",
        MigrateError::Unexpected(_) => "unexpected",
    };
    error!(kind, "{}", err);
    writeln!(out, "Error: {}", err)
}
