//! Token command implementation.

use combsort_server::{AuthConfig, TokenGate};

/// Runs the token command.
pub fn run(user: &str, secret: &str) -> Result<(), Box<dyn std::error::Error>> {
    if secret.is_empty() {
        return Err("Signing secret must not be empty".into());
    }

    let gate = TokenGate::new(AuthConfig::new(secret.as_bytes().to_vec()));
    let token = gate.create_token(user)?;
    println!("{token}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_secret() {
        assert!(run("alice", "").is_err());
    }

    #[test]
    fn rejects_bad_user() {
        assert!(run("alice smith", "secret").is_err());
    }
}
