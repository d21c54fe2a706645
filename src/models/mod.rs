mod question;
mod screen;

pub use question::Question;
pub use screen::Screen;
