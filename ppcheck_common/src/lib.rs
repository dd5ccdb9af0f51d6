pub mod ctx;
pub mod flags;
pub mod spanned;
pub mod token;
