//! CLI smoke entry point.
//!
//! # Responsibility
//! - Parse one container file with default settings and print a summary.
//! - Keep output as stable `key=value` lines for quick sanity checks.
//!
//! Set `NOTESCONV_LOG_DIR` (absolute path) to enable file logging.

use notesconv_core::{core_version, default_log_level, init_logging, NotesParser};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "NOTESCONV_LOG_DIR";

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: notesconv <file.nsf>");
        return ExitCode::from(2);
    };

    if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("notesconv_core version={}", core_version());
    match NotesParser::default().parse_file(&path) {
        Ok(app) => {
            println!("name={}", app.name);
            println!("format_version={}", app.format_version);
            println!("forms={}", app.forms.len());
            println!("views={}", app.views.len());
            println!("documents={}", app.documents.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error={err}");
            ExitCode::FAILURE
        }
    }
}
