use blox::cli::{dispatch, formatting_config, init_logging, parse_args, usage_message};
use blox::formatting::Diagnostics;
use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => return report_clap_error(&e),
    };
    init_logging(cli.verbosity);
    let diagnostics = Diagnostics::new(formatting_config(cli.plain));

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&diagnostics, &e);
            ExitCode::FAILURE
        }
    }
}

// Help and version succeed; every other argument error is a usage error (exit 1)
fn report_clap_error(error: &clap::Error) -> ExitCode {
    let _ = error.print();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

// Side effect handler for fatal errors (I/O at edges)
fn report_error(diagnostics: &Diagnostics, error: &anyhow::Error) {
    let is_usage = error
        .downcast_ref::<blox::Error>()
        .is_some_and(blox::Error::is_usage);

    eprintln!("{} {}", diagnostics.error("Error:"), error);
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", diagnostics.dim("caused by:"), cause);
    }
    if is_usage {
        eprintln!("{}", usage_message());
    }
}
