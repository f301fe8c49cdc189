// Glossa: language identification via character n-gram frequency vectors.
//
// This is the library root. Each module corresponds to one stage of the
// identification pipeline or a peripheral concern around it.

pub mod config;
pub mod corpus;
pub mod labels;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod similarity;
pub mod text;
