pub mod simulator;
pub mod transcoder;
