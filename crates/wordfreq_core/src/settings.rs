use crate::tokenizer::TokenPolicy;

/// Run settings. The command line takes no flags, so the binary always
/// uses the defaults; library callers pick a policy here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordFreqSettings {
    pub policy: TokenPolicy,
}

impl WordFreqSettings {
    pub fn with_policy(policy: TokenPolicy) -> Self {
        Self { policy }
    }
}
