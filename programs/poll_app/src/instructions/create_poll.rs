use anchor_lang::prelude::*;
use crate::{contexts::CreatePoll, state::{Poll, PollCreated}};

/// Creates the caller's next poll and returns its address.
///
/// The poll account was allocated at the address derived from the counter's
/// current value; taking the index here advances the counter inside the same
/// transaction, so a sequence index is never handed out twice.
pub fn handler(
    ctx: Context<CreatePoll>,
    question: String,
    options: Vec<String>,
    duration: Option<i64>,
) -> Result<Pubkey> {
    let user_stats = &mut ctx.accounts.user_stats;
    let creator = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let expires_at = Poll::expiry(clock.unix_timestamp, duration)?;
    let index = user_stats.take_poll_index()?;
    let poll = Poll::new(creator, index, question, options, expires_at, ctx.bumps.poll)?;
    let option_count = poll.options.len() as u8;

    ctx.accounts.poll.set_inner(poll);
    let address = ctx.accounts.poll.key();

    emit!(PollCreated {
        poll: address,
        creator,
        index,
        option_count,
        expires_at,
    });

    msg!("✅ Poll created at {}", address);
    msg!("   Index: {} ({} options)", index, option_count);
    if let Some(expires_at) = expires_at {
        msg!("   Expires at: {}", expires_at);
    }

    Ok(address)
}
