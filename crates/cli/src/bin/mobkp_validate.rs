use std::process::ExitCode;

fn main() -> ExitCode {
    mobkp_cli::main_entry()
}
