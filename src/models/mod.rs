mod focus;
mod question;

pub use focus::Focus;
pub use question::{NUM_CHOICES, Question, eq_ignore_case};
