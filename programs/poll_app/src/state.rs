use anchor_lang::prelude::*;

use crate::{constants::*, error::PollError};

// ============================================================================
// USER STATS - Per-creator poll counter
// ============================================================================

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct UserStats {
    /// Identity this counter belongs to
    pub owner: Pubkey,

    /// Number of polls created so far; also the index of the next poll
    pub polls_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl UserStats {
    /// PDA Seeds: ["user_stats", owner]
    pub fn find_address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[USER_STATS_SEED, owner.as_ref()], &crate::ID)
    }

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            polls_count: 0,
            bump,
        }
    }

    /// Returns the index for the owner's next poll and advances the counter.
    pub fn take_poll_index(&mut self) -> Result<u64> {
        let index = self.polls_count;
        self.polls_count = index
            .checked_add(1)
            .ok_or(PollError::ArithmeticOverflow)?;
        Ok(index)
    }
}

// ============================================================================
// POLL - Question, options and the tally
// ============================================================================

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Poll {
    /// Identity that created the poll
    pub creator: Pubkey,

    /// Position in the creator's poll sequence
    pub index: u64,

    pub question: String,

    pub options: Vec<String>,

    /// `votes[i]` counts the votes cast for `options[i]`
    pub votes: Vec<u32>,

    /// Identities that already voted, kept sorted
    pub voters: Vec<Pubkey>,

    /// Votes are rejected once the clock reaches this timestamp
    pub expires_at: Option<i64>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Poll {
    /// PDA Seeds: ["poll", user_stats, index (u64 LE)]
    pub fn find_address(user_stats: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POLL_SEED, user_stats.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
    }

    /// Account size, discriminator included, for the given content.
    pub fn space(question: &str, options: &[String], voters: usize) -> usize {
        8 // discriminator
            + 32 // creator
            + 8 // index
            + 4 + question.len()
            + 4 + options.iter().map(|option| 4 + option.len()).sum::<usize>()
            + 4 + 4 * options.len() // votes
            + 4 + 32 * voters
            + 1 + 8 // expires_at
            + 1 // bump
    }

    pub fn validate(question: &str, options: &[String]) -> Result<()> {
        require!(!question.trim().is_empty(), PollError::EmptyQuestion);
        require_gte!(MAX_QUESTION_LEN, question.len(), PollError::QuestionTooLong);
        require_gte!(options.len(), MIN_OPTIONS, PollError::TooFewOptions);
        require_gte!(MAX_OPTIONS, options.len(), PollError::TooManyOptions);

        for option in options {
            require!(!option.trim().is_empty(), PollError::EmptyOption);
            require_gte!(MAX_OPTION_LEN, option.len(), PollError::OptionTooLong);
        }

        Ok(())
    }

    /// Turns an optional duration in seconds into an absolute expiry.
    pub fn expiry(now: i64, duration: Option<i64>) -> Result<Option<i64>> {
        let Some(seconds) = duration else {
            return Ok(None);
        };
        require_gt!(seconds, 0, PollError::InvalidDuration);

        let expires_at = now
            .checked_add(seconds)
            .ok_or(PollError::ArithmeticOverflow)?;
        Ok(Some(expires_at))
    }

    pub fn new(
        creator: Pubkey,
        index: u64,
        question: String,
        options: Vec<String>,
        expires_at: Option<i64>,
        bump: u8,
    ) -> Result<Self> {
        Self::validate(&question, &options)?;
        let votes = vec![0; options.len()];

        Ok(Self {
            creator,
            index,
            question,
            options,
            votes,
            voters: Vec::new(),
            expires_at,
            bump,
        })
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Records `voter`'s vote for `option_index` and returns the option's new
    /// count. Nothing is modified unless every check passes.
    pub fn cast_vote(&mut self, voter: Pubkey, option_index: u8, now: i64) -> Result<u32> {
        require!(!self.is_expired(now), PollError::PollExpired);

        let slot = usize::from(option_index);
        require!(slot < self.options.len(), PollError::InvalidOptionIndex);

        let position = match self.voters.binary_search(&voter) {
            Ok(_) => return err!(PollError::AlreadyVoted),
            Err(position) => position,
        };

        let count = self
            .votes
            .get_mut(slot)
            .ok_or(PollError::InvalidOptionIndex)?;
        let updated = count.checked_add(1).ok_or(PollError::ArithmeticOverflow)?;

        *count = updated;
        self.voters.insert(position, voter);

        Ok(updated)
    }

    pub fn total_votes(&self) -> u64 {
        self.votes.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn results(&self) -> PollResults {
        PollResults {
            question: self.question.clone(),
            results: self
                .options
                .iter()
                .zip(&self.votes)
                .map(|(option, &votes)| OptionResult {
                    option: option.clone(),
                    votes,
                })
                .collect(),
            total_votes: self.total_votes(),
        }
    }

    /// Options sharing the highest count. With no votes cast every option ties at zero.
    pub fn winner(&self) -> PollWinner {
        let votes = self.votes.iter().copied().max().unwrap_or(0);
        let winners = self
            .options
            .iter()
            .zip(&self.votes)
            .filter(|(_, count)| **count == votes)
            .map(|(option, _)| option.clone())
            .collect();

        PollWinner { winners, votes }
    }
}

// ============================================================================
// VIEW RESULTS - Returned from read-only instructions
// ============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionResult {
    pub option: String,
    pub votes: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PollResults {
    pub question: String,
    pub results: Vec<OptionResult>,
    pub total_votes: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PollWinner {
    pub winners: Vec<String>,
    pub votes: u32,
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct UserInitialized {
    pub owner: Pubkey,
    pub user_stats: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PollCreated {
    pub poll: Pubkey,
    pub creator: Pubkey,
    pub index: u64,
    pub option_count: u8,
    pub expires_at: Option<i64>,
}

#[event]
pub struct VoteCast {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub option_index: u8,
    pub option_votes: u32,
    pub total_votes: u64,
    pub timestamp: i64,
}
