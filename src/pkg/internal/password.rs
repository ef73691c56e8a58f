use bcrypt::{hash, verify, DEFAULT_COST};
use lazy_static::lazy_static;

use crate::prelude::Result;

// bcrypt is CPU-bound, keep it off the async workers

lazy_static! {
    // derived once at first use; never matches a real credential
    static ref TIMING_PAD_HASH: String =
        hash("hustlink-timing-pad", DEFAULT_COST).expect("default bcrypt cost is valid");
}

pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    let password = password.to_string();
    let hashed = hashed.to_string();
    let ok = tokio::task::spawn_blocking(move || verify(password, &hashed)).await??;
    Ok(ok)
}

/// Burns a full verification against the pad hash so a login attempt with an
/// unknown username costs the same as one with a wrong password.
pub async fn verify_timing_pad(password: &str) -> Result<()> {
    verify_password(password, &TIMING_PAD_HASH).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_roundtrip() -> Result<()> {
        let hashed = hash_password("pw123").await?;
        assert_ne!(hashed, "pw123");
        assert!(verify_password("pw123", &hashed).await?);
        assert!(!verify_password("pw124", &hashed).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_timing_pad_is_a_well_formed_hash_that_never_matches() -> Result<()> {
        verify_timing_pad("anything").await?;
        assert!(!verify_password("anything", &TIMING_PAD_HASH).await?);
        Ok(())
    }
}
