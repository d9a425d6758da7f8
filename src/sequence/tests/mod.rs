mod conversion;
mod mutation;
mod queue;
#[cfg(feature = "serialization")]
mod serialization;
