use anchor_lang::prelude::*;
use crate::{contexts::ViewPoll, state::PollResults};

pub fn handler(ctx: Context<ViewPoll>) -> Result<PollResults> {
    Ok(ctx.accounts.poll.results())
}
