//! Prints 32 cryptographically secure random bytes as uppercase hex.

use std::process::ExitCode;

use securerand::output::to_hex_line;
use securerand::SecureRandomSource;

const LENGTH: usize = 32;

fn main() -> ExitCode {
    env_logger::init();

    let source = SecureRandomSource::new();
    let mut buf = [0u8; LENGTH];
    match source.fill(&mut buf, LENGTH) {
        Ok(used) => {
            log::info!("{} bytes from {}", LENGTH, used);
            print!("result(HEX) : {}", to_hex_line(&buf));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("secure-hex: {}", e);
            ExitCode::FAILURE
        }
    }
}
