//! Stale-response guard for overlapping fetches.
//!
//! A manual refresh and a polling tick can both be in flight; whichever
//! resolves last used to win. Each fetch now takes a token and only the most
//! recently issued token may write its response into screen state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Invalidate everything in flight without starting a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_applies() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
        assert!(second > first);

        seq.invalidate();
        assert!(!seq.is_latest(second));
    }
}
