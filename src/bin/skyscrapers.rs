use std::process::ExitCode;

fn main() -> ExitCode {
    skyscrapers_checker::cli::main()
}
