// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const USER_STATS_SEED: &[u8] = b"user_stats";

pub const POLL_SEED: &[u8] = b"poll";

// ============================================================================
// POLL LIMITS
// ============================================================================

/// Longest accepted question, in bytes
pub const MAX_QUESTION_LEN: usize = 256;

/// A poll needs at least two options to choose between
pub const MIN_OPTIONS: usize = 2;

/// Upper bound on options per poll
pub const MAX_OPTIONS: usize = 8;

/// Longest accepted option label, in bytes
pub const MAX_OPTION_LEN: usize = 64;

/// Solana caps instruction return data at 1024 bytes. The limits above keep
/// the largest `PollResults` under it.
pub const MAX_RETURN_DATA: usize = 1024;
