#![forbid(unsafe_code)]

/// Builds a [`Sequence`](crate::sequence::Sequence) from a list of elements,
/// the same way `vec!` builds a `Vec`.
///
/// ```
/// use chainseq::prelude::*;
///
/// let sequence = chainseq::seq![1, 2, 3];
/// assert_eq!(sequence.length(), 3);
///
/// let empty: Sequence<i32> = chainseq::seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from(vec![$($x),+])
    };
}

/// Implements [`TextRenderable`](crate::text::TextRenderable) for one or more
/// types through their `Display` implementation.
///
/// ```
/// use chainseq::prelude::*;
///
/// struct Temperature(i32);
///
/// impl std::fmt::Display for Temperature {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// chainseq::render_via_display!(Temperature);
///
/// let readings = Sequence::from(vec![Temperature(20), Temperature(-3)]);
/// assert_eq!(readings.join(" / "), "20C / -3C");
/// ```
#[macro_export]
macro_rules! render_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::text::TextRenderable for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

pub mod sequence;
pub mod text;

pub use sequence::prelude;
