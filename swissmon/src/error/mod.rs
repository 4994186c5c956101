mod context;
mod error;
mod rejection;
mod swissmon_error;
mod validation_error;

pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use rejection::{
    BattleRejection,
    as_rejection,
    rejection,
};
pub use swissmon_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use validation_error::ValidationError;
