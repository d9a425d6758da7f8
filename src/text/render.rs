use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// ### -> `TextRenderable Trait`.
///
/// The capability of rendering a value as text. Every element type used with
/// [`Join::join`](crate::sequence::traits::Join::join) must implement it.
///
/// ### -> `Rendering Rules`
///
/// - **Integers**: decimal text, sign only when negative.
/// - **Booleans**: `"true"` / `"false"`.
/// - **Floats**: shortest round-trippable decimal text, never in exponent form.
///   `NaN` renders as `"NaN"` and infinities as `"+Inf"` / `"-Inf"`.
/// - **Text** (`str`, `String`, `char`, `Cow<str>`): the text itself, unmodified.
/// - **Absent** (`()`, `Option::None`): empty text.
/// - **Indirections** (`&V`, `&mut V`, `Box<V>`, `Rc<V>`, `Arc<V>`): every layer is
///   dereferenced, so `Box<Box<V>>` renders as `V`. The dynamic [`render_any`] path
///   follows at most one `Box<dyn Any>` layer.
///
/// User-defined types implement the trait by hand, or through their `Display`
/// implementation with [`render_via_display!`](crate::render_via_display).
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::text::TextRenderable;
///
/// struct Greeting {
///     message: String,
/// }
///
/// impl TextRenderable for Greeting {
///     fn render(&self) -> String {
///         self.message.clone()
///     }
/// }
///
/// assert_eq!(Greeting { message: "hello".into() }.render(), "hello");
/// assert_eq!(10.5_f64.render(), "10.5");
/// assert_eq!(Some(-4).render(), "-4");
/// assert_eq!(None::<i32>.render(), "");
/// ```
pub trait TextRenderable {
    fn render(&self) -> String;
}

/// Renders `value` as text. Free-function form of [`TextRenderable::render`].
pub fn stringify<V>(value: &V) -> String
where
    V: TextRenderable + ?Sized,
{
    value.render()
}

macro_rules! render_integers {
    ($($ty:ty),+) => {
        $(
            impl TextRenderable for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

render_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! render_floats {
    ($($ty:ty),+) => {
        $(
            impl TextRenderable for $ty {
                fn render(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let sign = if self.is_sign_positive() { '+' } else { '-' };
                        format!("{sign}Inf")
                    } else {
                        // `Display` for floats is already the shortest round-trip form
                        // and never switches to exponent notation.
                        self.to_string()
                    }
                }
            }
        )+
    };
}

render_floats!(f32, f64);

impl TextRenderable for bool {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl TextRenderable for char {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl TextRenderable for str {
    fn render(&self) -> String {
        self.to_owned()
    }
}

impl TextRenderable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl TextRenderable for Cow<'_, str> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl TextRenderable for () {
    fn render(&self) -> String {
        String::new()
    }
}

impl<V: TextRenderable> TextRenderable for Option<V> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => String::new(),
        }
    }
}

impl<V: TextRenderable + ?Sized> TextRenderable for &V {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<V: TextRenderable + ?Sized> TextRenderable for &mut V {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<V: TextRenderable + ?Sized> TextRenderable for Box<V> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<V: TextRenderable + ?Sized> TextRenderable for Rc<V> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<V: TextRenderable + ?Sized> TextRenderable for Arc<V> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Probes the runtime kind of `value` against the supported primitive kinds.
fn probe_primitive(value: &dyn Any) -> Option<String> {
    macro_rules! probe_kinds {
        ($($ty:ty),+) => {
            $(
                if let Some(inner) = value.downcast_ref::<$ty>() {
                    return Some(inner.render());
                }
            )+
        };
    }

    probe_kinds!(
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64, bool, char, String, &'static str, ()
    );

    None
}

/// Like [`probe_primitive`], but unwraps one `Box<dyn Any>` first.
fn probe(value: &dyn Any) -> Option<String> {
    probe_primitive(value).or_else(|| {
        let boxed = value.downcast_ref::<Box<dyn Any>>()?;
        probe_primitive(&**boxed)
    })
}

/// ### -> `render_any`
///
/// Renders a value whose kind is only known at runtime.
///
/// - `None` (absent) renders as empty text.
/// - Integers, floats, booleans, characters, `String` and `&'static str` follow
///   the [`TextRenderable`] rules.
/// - A `Box<dyn Any>` is dereferenced once before probing.
/// - Any other kind renders as empty text. Use [`try_render_any`] to surface it as an error.
///
/// ```
/// use std::any::Any;
/// use chainseq::text::render_any;
///
/// assert_eq!(render_any(Some(&10_i64 as &dyn Any)), "10");
/// assert_eq!(render_any(Some(&true as &dyn Any)), "true");
/// assert_eq!(render_any(None), "");
///
/// struct Opaque;
/// assert_eq!(render_any(Some(&Opaque as &dyn Any)), "");
/// ```
pub fn render_any(value: Option<&dyn Any>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match probe(value) {
        Some(text) => text,
        None => {
            tracing::debug!(type_id = ?value.type_id(), "unsupported value kind rendered as empty text");
            String::new()
        }
    }
}

/// Strict form of [`render_any`]: fails instead of producing empty text for
/// unsupported kinds. Absent values still render as empty text.
///
/// ```
/// use std::any::Any;
/// use chainseq::text::try_render_any;
///
/// assert_eq!(try_render_any(Some(&2.5_f32 as &dyn Any)).unwrap(), "2.5");
///
/// struct Opaque;
/// assert!(try_render_any(Some(&Opaque as &dyn Any)).is_err());
/// ```
pub fn try_render_any(value: Option<&dyn Any>) -> anyhow::Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    probe(value).ok_or_else(|| {
        anyhow::anyhow!(
            "Value of type {:?} cannot be rendered as text; implement TextRenderable for it instead.",
            value.type_id()
        )
    })
}
