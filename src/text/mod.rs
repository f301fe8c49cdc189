// Text preparation — normalization and n-gram extraction.

pub mod ngram;
pub mod normalize;
