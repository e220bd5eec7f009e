//! iif-convert - Convert an IIF list export to QIF, CSV or canonical IIF.

fn main() -> std::process::ExitCode {
    iifconv::cmd::convert::main()
}
