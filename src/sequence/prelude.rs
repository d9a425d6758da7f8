pub use {
    crate::sequence::Sequence,
    crate::sequence::traits::{Access, Conversion, Join, Length, Mutation, Query, Queue, Search, SnapShot, Stack, Transform},
    crate::text::{TextRenderable, stringify},
};

#[cfg(feature = "serialization")]
pub use {
    crate::sequence::BincodeConfiguration,
    crate::sequence::traits::Bincode,
};
