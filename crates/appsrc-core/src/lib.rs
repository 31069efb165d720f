pub mod config;
pub mod credential;
pub mod github;
pub mod logging;
pub mod merge;
pub mod normalize;
pub mod pipeline;
