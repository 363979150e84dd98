//! Anti-CSRF `state` token generation for the authorization URL.

use rand::Rng;

use crate::config::STATE_TOKEN_LEN;

/// Generate a fresh random `state` token: 10 lowercase ASCII letters.
pub fn generate_state_token() -> String {
    let mut rng = rand::rng();
    (0..STATE_TOKEN_LEN)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_token_shape() {
        let token = generate_state_token();
        assert_eq!(token.len(), STATE_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_state_tokens_differ() {
        // Collisions are possible but vanishingly unlikely across 16 draws.
        let tokens: std::collections::HashSet<String> =
            (0..16).map(|_| generate_state_token()).collect();
        assert!(tokens.len() > 1);
    }
}
