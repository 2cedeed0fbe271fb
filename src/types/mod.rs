pub mod settings;
pub mod token;

pub use settings::*;
pub use token::*;
