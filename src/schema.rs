/// Expand a reply status table into the `ReplyStatus` enum, the raw `value`
/// constants and the per-variant lookups.
///
/// Each row reads `Variant = value => IDL_NAME, OutcomeClass;` and may carry
/// doc comments, which land on both the variant and its constant.
/// Duplicate values are rejected by the compiler through the explicit
/// `#[repr(i16)]` discriminants.
macro_rules! reply_statuses {
    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident = $value:literal => $name:ident, $outcome:ident;
        )+
    ) => {
        /// How a remote invocation concluded.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(into = "i16", try_from = "i16")]
        #[repr(i16)]
        pub enum ReplyStatus {
            $(
                $(#[doc = $doc])*
                $variant = $value,
            )+
        }

        /// Raw wire values, one constant per reply status.
        pub mod value {
            $(
                $(#[doc = $doc])*
                pub const $name: i16 = $value;
            )+
        }

        impl ReplyStatus {
            /// Every reply status, in ascending value order.
            pub const ALL: &'static [ReplyStatus] = &[$(ReplyStatus::$variant),+];

            /// Canonical IDL name, e.g. `"SUCCESSFUL"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ReplyStatus::$variant => stringify!($name),)+
                }
            }

            pub const fn outcome(self) -> $crate::reply_status::Outcome {
                match self {
                    $(ReplyStatus::$variant => $crate::reply_status::Outcome::$outcome,)+
                }
            }

            const fn from_value(value: i16) -> Option<Self> {
                match value {
                    $($value => Some(ReplyStatus::$variant),)+
                    _ => None,
                }
            }
        }
    };
}
