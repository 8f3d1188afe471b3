pub mod config;

pub use config::{
    Config, ConfigBuilder, DEFAULT_POINT_COUNT, MAX_POINT_COUNT, MAX_RADIUS, MIN_POINT_COUNT,
    MIN_RADIUS,
};
