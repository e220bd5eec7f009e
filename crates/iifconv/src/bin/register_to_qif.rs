//! register-to-qif - Convert a tab-delimited register report to QIF.

fn main() -> std::process::ExitCode {
    iifconv::cmd::register_cmd::main()
}
