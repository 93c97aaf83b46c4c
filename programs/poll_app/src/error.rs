use anchor_lang::prelude::*;

#[error_code]
pub enum PollError {
    #[msg("Question must not be empty")]
    EmptyQuestion,

    #[msg("Question exceeds the maximum length")]
    QuestionTooLong,

    #[msg("A poll needs at least two options")]
    TooFewOptions,

    #[msg("Too many options for a single poll")]
    TooManyOptions,

    #[msg("Option labels must not be empty")]
    EmptyOption,

    #[msg("Option label exceeds the maximum length")]
    OptionTooLong,

    #[msg("Poll duration must be positive")]
    InvalidDuration,

    #[msg("Invalid option index")]
    InvalidOptionIndex,

    #[msg("User has already voted")]
    AlreadyVoted,

    #[msg("Poll has expired")]
    PollExpired,

    #[msg("Arithmetic overflow in poll counters")]
    ArithmeticOverflow,
}
