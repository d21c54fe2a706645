mod source;

pub use source::{FileSource, LoadError, QuestionSource, parse_questions};
