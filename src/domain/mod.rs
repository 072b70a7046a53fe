pub mod codes;
pub mod models;

pub use codes::{
    ActionCode, AttackOutcome, Category, OtherOutcome, ReceptionOutcome, ServeOutcome,
    is_error_code, is_point_code, label_for, label_for_raw,
};
pub use models::{PlayerRef, Position, StatEvent, validate_events};
