//! Closed choice sets for enumerated record fields.

use thiserror::Error;

/// A field restricted to a fixed set of stored values.
///
/// Each variant has a stored value (what the database column holds) and a
/// display label for presentation layers.
pub trait Choice: Copy + Eq + 'static {
    /// Name of the choice set, used in error messages.
    const KIND: &'static str;
    /// Every accepted variant, in declaration order.
    const ALL: &'static [Self];

    /// Stored value.
    fn value(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Stored values of every variant, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.value()).collect()
    }
}

/// Error returned when a value is outside a choice set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownChoice {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Declares a string-valued choice enum with its [`Choice`] impl,
/// `Display`, `FromStr`, and serde using the stored values.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $crate::choice::Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::choice::Choice::value(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::choice::UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err($crate::choice::UnknownChoice::new($kind, other)),
                }
            }
        }
    };
}

pub(crate) use choice_enum;
