// src/macros.rs

/// Formats a labelled pair as `label: (a; b)`.
#[macro_export]
macro_rules! pair {
    ($label:expr, $a:expr, $b:expr) => {
        format!("{}: ({}; {})", $label, $a, $b)
    };
}

/// Declares a closed enumeration backed by a static name table.
///
/// A trailing `Unknown` variant is appended whose ordinal equals the table
/// length, so it always falls outside the table and resolves to "Unknown".
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $($variant,)+
            Unknown,
        }

        impl $name {
            /// Every named value in ordinal order, without the sentinel.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                $crate::event_names::name_of(self)
            }
        }

        impl $crate::event_names::Named for $name {
            const COUNT: usize = $name::ALL.len();
            const TABLE: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}
