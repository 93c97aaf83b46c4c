pub mod create_poll;
pub mod get_results;
pub mod get_winner;
pub mod initialize_user;
pub mod vote;
