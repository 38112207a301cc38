pub mod emitter;
pub mod generator;
pub mod geometry;
pub mod plan;

pub fn version() -> &'static str {
    "0.1.0"
}
