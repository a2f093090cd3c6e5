//! Closed vocabularies of the PubChem PUG REST API.
//!
//! Every value here is spelled exactly as the upstream API expects it, so
//! spelling is case and punctuation sensitive (`MolecularWeight`,
//! `fastsimilarity_2d`). Parsing is exact: `json` is not an output format,
//! `JSON` is.

/// Declares a closed vocabulary enum.
///
/// Each variant maps to exactly one upstream spelling, which is used for
/// `Display`, `FromStr` and serde. Attributes on a variant (such as
/// `#[default]` under `#[derive(Default)]`) are passed through.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every legal value, in upstream documentation order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the upstream spelling of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> $crate::error::DomainResult<Self> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err($crate::error::DomainError::UnknownValue {
                        vocabulary: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

mod assay;
mod compound;
mod output;
mod substance;
mod xref;

pub use assay::{AssayNamespace, AssayOperation, AssayType, TargetKind, TargetsKind};
pub use compound::{CompoundNamespace, CompoundOperation, CompoundProperty, FastSearchInput};
pub use output::{Domain, OutputFormat};
pub use substance::{SubstanceNamespace, SubstanceOperation};
pub use xref::{XrefKind, XrefsKind};
