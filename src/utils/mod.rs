mod extractors;

pub use extractors::Payload;
