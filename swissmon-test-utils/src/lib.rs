mod error_assert;
mod fixtures;
mod log_assert;
mod rng;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
    assert_rejection,
};
pub use fixtures::{
    player_with_team,
    test_options,
};
pub use log_assert::assert_new_logs_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
    unit_draw,
};
