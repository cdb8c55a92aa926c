//! Session Tokens
//!
//! `SESSIONID` value: `base64url(user_id) "." base64url(HMAC-SHA256(secret, user_id))`.
//! A token is stable per user, so the stored session record survives re-login.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

#[derive(Clone)]
pub struct SessionTokens {
    secret: [u8; 32],
}

impl SessionTokens {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn issue(&self, user_id: &str) -> String {
        let signature = hmac_sha256(&self.secret, user_id.as_bytes());
        format!(
            "{}.{}",
            to_base64_url(user_id.as_bytes()),
            to_base64_url(&signature)
        )
    }

    /// User id carried by a token, if its signature is valid
    pub fn verify(&self, token: &str) -> Option<String> {
        let (user_part, signature_part) = token.split_once('.')?;

        let user_id = String::from_utf8(from_base64_url(user_part).ok()?).ok()?;
        let signature = from_base64_url(signature_part).ok()?;

        verify_hmac_sha256(&self.secret, user_id.as_bytes(), &signature).then_some(user_id)
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let tokens = SessionTokens::new([1u8; 32]);
        let token = tokens.issue("user-42");

        assert_eq!(tokens.verify(&token), Some("user-42".to_string()));
        assert_eq!(token, tokens.issue("user-42"));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_rejects_other_secret() {
        let token = SessionTokens::new([1u8; 32]).issue("user-42");
        assert!(SessionTokens::new([2u8; 32]).verify(&token).is_none());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let tokens = SessionTokens::new([1u8; 32]);
        let token = tokens.issue("user-42");
        let (_, signature) = token.split_once('.').unwrap();

        let forged = format!("{}.{}", to_base64_url(b"admin"), signature);
        assert!(tokens.verify(&forged).is_none());
        assert!(tokens.verify("").is_none());
        assert!(tokens.verify("no-dot").is_none());
        assert!(tokens.verify("!!!.???").is_none());
    }
}
