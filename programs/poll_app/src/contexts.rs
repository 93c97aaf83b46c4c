use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

/// Create the caller's poll counter
#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Fails if the caller already has one, so the counter is never reset
    #[account(
        init,
        payer = user,
        space = 8 + UserStats::INIT_SPACE,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_stats: Account<'info, UserStats>,

    pub system_program: Program<'info, System>,
}

/// Create the next poll in the caller's sequence
#[derive(Accounts)]
#[instruction(question: String, options: Vec<String>)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump = user_stats.bump
    )]
    pub user_stats: Account<'info, UserStats>,

    /// Addressed by the counter value before this poll is counted
    #[account(
        init,
        payer = user,
        space = Poll::space(&question, &options, 0),
        seeds = [
            POLL_SEED,
            user_stats.key().as_ref(),
            user_stats.polls_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Cast a vote; the voter pays for the extra voter slot
#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        realloc = Poll::space(&poll.question, &poll.options, poll.voters.len() + 1),
        realloc::payer = voter,
        realloc::zero = false
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Read-only access to a poll
#[derive(Accounts)]
pub struct ViewPoll<'info> {
    pub poll: Account<'info, Poll>,
}
