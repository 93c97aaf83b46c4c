use anchor_lang::prelude::*;
use crate::{contexts::InitializeUser, state::{UserInitialized, UserStats}};

pub fn handler(ctx: Context<InitializeUser>) -> Result<()> {
    let user_stats = &mut ctx.accounts.user_stats;
    let owner = ctx.accounts.user.key();
    let clock = Clock::get()?;

    user_stats.set_inner(UserStats::new(owner, ctx.bumps.user_stats));

    emit!(UserInitialized {
        owner,
        user_stats: user_stats.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("✅ User stats initialized!");
    msg!("   Owner: {}", owner);
    msg!("   Address: {}", user_stats.key());

    Ok(())
}
