use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while configuring or running generation.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("donor count must be greater than zero")]
    NoDonors,

    #[error("cannot assign donor pincodes from an empty pincode set")]
    NoPincodes,

    #[error("invalid blood type distribution: {0}")]
    Distribution(#[from] rand::distributions::WeightedError),

    #[error(
        "{date}: cannot sample {requested} distinct donors from a pool of {available}"
    )]
    DonorPoolExhausted {
        date: NaiveDate,
        requested: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, SynthError>;
