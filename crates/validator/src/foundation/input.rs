//! Uniform view over untyped input values.
//!
//! Validators accept anything, including values of the wrong type, and
//! report a type mismatch as an ordinary `Invalid` result. [`Input`] is the
//! seam that makes this possible: it asks a value whether it is text or a
//! number without committing the caller to one concrete type.
//!
//! `serde_json::Value` is the primary carrier for dynamic data; plain Rust
//! strings and numbers are supported so typed callers need no wrapping.

use std::borrow::Cow;

use serde_json::Value;

// ============================================================================
// INPUT TRAIT
// ============================================================================

/// A value that may or may not be a string or a number.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Input;
/// use serde_json::json;
///
/// assert_eq!(json!("hi").text(), Some("hi"));
/// assert_eq!(json!(3).number(), Some(3.0));
/// assert_eq!(json!(null).text(), None);
/// assert_eq!("7".number(), None);
/// ```
pub trait Input {
    /// Returns the value as text when it is a string.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Returns the value as a number when it is numeric.
    ///
    /// Non-finite floats are still returned; callers decide whether they
    /// are acceptable.
    fn number(&self) -> Option<f64> {
        None
    }
}

// ============================================================================
// DYNAMIC VALUES
// ============================================================================

impl Input for Value {
    fn text(&self) -> Option<&str> {
        self.as_str()
    }

    fn number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl<T: Input> Input for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.text())
    }

    fn number(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.number())
    }
}

impl<T: Input + ?Sized> Input for &T {
    #[inline]
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    #[inline]
    fn number(&self) -> Option<f64> {
        (**self).number()
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl Input for str {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Input for String {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Input for Box<str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Input for Cow<'_, str> {
    #[inline]
    fn text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

impl Input for f64 {
    #[inline]
    fn number(&self) -> Option<f64> {
        Some(*self)
    }
}

macro_rules! impl_numeric_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Input for $ty {
                #[inline]
                fn number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_input!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Neither text nor number.
impl Input for bool {}
impl Input for () {}

// ============================================================================
// TESTS
// ============================================================================
