use anchor_lang::prelude::*;
use crate::{contexts::Vote, state::VoteCast};

pub fn handler(ctx: Context<Vote>, option_index: u8) -> Result<()> {
    let poll = &mut ctx.accounts.poll;
    let voter = ctx.accounts.voter.key();
    let clock = Clock::get()?;

    let option_votes = poll.cast_vote(voter, option_index, clock.unix_timestamp)?;

    emit!(VoteCast {
        poll: poll.key(),
        voter,
        option_index,
        option_votes,
        total_votes: poll.total_votes(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "🗳️ Vote recorded for option {} ({} votes, {} total)",
        option_index,
        option_votes,
        poll.total_votes()
    );

    Ok(())
}
