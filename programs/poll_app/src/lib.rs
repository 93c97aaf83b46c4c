pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("8hLpnr7jBwD3UsS5DvbQF4mLK6qzyg6KQFmePsJrwMR5");

/// Poll App: polls with one vote per signer
///
/// - Every creator owns a `UserStats` counter at ["user_stats", creator]
/// - Polls live at ["poll", user_stats, index], so a creator's polls can be
///   found from the counter alone
/// - Each vote is checked and recorded in the same transaction, so a signer
///   can never be counted twice
#[program]
pub mod poll_app {
    use super::*;

    /// Create the caller's poll counter (once per identity)
    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        instructions::initialize_user::handler(ctx)
    }

    /// Create a poll; `duration` is in seconds from now
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        question: String,
        options: Vec<String>,
        duration: Option<i64>,
    ) -> Result<Pubkey> {
        instructions::create_poll::handler(ctx, question, options, duration)
    }

    /// Vote for `options[option_index]`
    pub fn vote(ctx: Context<Vote>, option_index: u8) -> Result<()> {
        instructions::vote::handler(ctx, option_index)
    }

    /// Current tally (view)
    pub fn get_results(ctx: Context<ViewPoll>) -> Result<PollResults> {
        instructions::get_results::handler(ctx)
    }

    /// Leading option(s) (view)
    pub fn get_winner(ctx: Context<ViewPoll>) -> Result<PollWinner> {
        instructions::get_winner::handler(ctx)
    }
}
