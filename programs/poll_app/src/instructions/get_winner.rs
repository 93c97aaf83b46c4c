use anchor_lang::prelude::*;
use crate::{contexts::ViewPoll, state::PollWinner};

/// Options holding the most votes; ties are all returned.
pub fn handler(ctx: Context<ViewPoll>) -> Result<PollWinner> {
    let winner = ctx.accounts.poll.winner();
    msg!("Leading with {} votes: {:?}", winner.votes, winner.winners);
    Ok(winner)
}
