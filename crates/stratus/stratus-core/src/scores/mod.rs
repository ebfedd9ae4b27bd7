//! Priority scores: the clamped [`Score`], the six [`Dimension`]s and the [`ScoreVector`].

mod dimension;
mod score;
mod vector;

pub use dimension::Dimension;
pub use score::Score;
pub use vector::ScoreVector;
