pub mod policy;
pub mod question;

pub use policy::{ParsePolicy, QuestionStyle};
pub use question::{Line, OptionLabel, QuestionRecord};
