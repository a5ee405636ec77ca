// Purpose - host-facing sample formats, volt conversion

pub mod converter;
pub mod sample;

pub use sample::Sample;
