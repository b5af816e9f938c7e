pub mod inspect;
mod input;
pub mod normalize;
pub mod validate;
