use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    CancellationReason,
    OrderSummary,
    CreditsBalance,
    TransactionHistory,
    TierStatus,
    ProfileInfo,
    General,
}

impl Intent {
    /// Whether this intent looks up an order record (as opposed to a
    /// loyalty account or nothing at all).
    pub fn wants_order(&self) -> bool {
        matches!(self, Intent::OrderSummary | Intent::CancellationReason)
    }

    pub fn wants_loyalty(&self) -> bool {
        matches!(
            self,
            Intent::CreditsBalance
                | Intent::TransactionHistory
                | Intent::TierStatus
                | Intent::ProfileInfo
        )
    }
}

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "help"];
const CREDITS_KEYWORDS: &[&str] = &["credit", "points", "balance"];
const HISTORY_KEYWORDS: &[&str] = &["transaction", "purchase", "history", "bought"];
const TIER_KEYWORDS: &[&str] = &["tier", "status", "level"];
const PROFILE_KEYWORDS: &[&str] = &["profile", "my details", "membership"];

/// Classify free text into a response category. Case-insensitive, first
/// matching rule wins, evaluated top to bottom. Greeting is checked first so
/// a bare "hi" short-circuits to the capability menu before any lookup.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    // Greeting words match whole tokens only: "hi" must not fire inside
    // "history", "help" not inside "helpless".
    let is_greeting = lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| GREETING_WORDS.contains(&token))
        || lowered.contains("who are you");
    if is_greeting {
        return Intent::Greeting;
    }

    if lowered.contains("cancellation reason") {
        return Intent::CancellationReason;
    }
    if lowered.contains("summary") {
        return Intent::OrderSummary;
    }
    if CREDITS_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Intent::CreditsBalance;
    }
    if HISTORY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Intent::TransactionHistory;
    }
    if TIER_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Intent::TierStatus;
    }
    if PROFILE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Intent::ProfileInfo;
    }

    Intent::General
}
