use std::io::{self, BufRead};
use std::process::ExitCode;

use identity_password::Argon2Hasher;
use identity_password::config::Config;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: identity-password hash | identity-password verify <stored>\n\
                     (the password is read from the first line of stdin)";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let hasher = match Config::from_env().and_then(|config| Argon2Hasher::from_config(&config)) {
        Ok(hasher) => hasher,
        Err(e) => {
            tracing::error!(error = %e, "failed to load hasher configuration");
            return ExitCode::from(2);
        }
    };

    let mut args = std::env::args().skip(1);
    match (args.next().as_deref(), args.next(), args.next()) {
        (Some("hash"), None, None) => run_hash(&hasher),
        (Some("verify"), Some(stored), None) => run_verify(&hasher, &stored),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run_hash(hasher: &Argon2Hasher) -> ExitCode {
    let password = match read_password() {
        Ok(password) => password,
        Err(e) => {
            tracing::error!(error = %e, "failed to read password from stdin");
            return ExitCode::from(2);
        }
    };
    match hasher.hash(&password) {
        Ok(stored) => {
            println!("{stored}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "hashing failed");
            ExitCode::from(2)
        }
    }
}

fn run_verify(hasher: &Argon2Hasher, stored: &str) -> ExitCode {
    let password = match read_password() {
        Ok(password) => password,
        Err(e) => {
            tracing::error!(error = %e, "failed to read password from stdin");
            return ExitCode::from(2);
        }
    };
    match hasher.verify(&password, stored) {
        Ok(true) => {
            tracing::info!("password matches");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            tracing::info!("password does not match");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(error = %e, "verification failed");
            ExitCode::from(2)
        }
    }
}

/// First stdin line with a single trailing `\n` or `\r\n` removed.
fn read_password() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(strip_line_ending(line))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
