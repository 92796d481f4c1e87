// Domain layer - Graph data model and the sample transform
pub mod graph;
pub mod sample;
pub mod timeframe;
pub mod transform;
