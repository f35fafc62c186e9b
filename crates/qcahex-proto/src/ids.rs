/// Defines a closed id registry.
///
/// Expands to a `Copy` enum with one variant per known id plus an
/// `Unknown(raw)` tail, and three total accessors: `from_id` (never fails),
/// `id` (raw value back) and `name` (wire-format constant, `None` for
/// unknown ids). Each id appears exactly once, next to its wire name.
macro_rules! id_registry {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($raw:ty) {
            $($variant:ident = $value:literal => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($variant,)+
            /// Id outside the registry, carrying the raw value.
            Unknown($raw),
        }

        impl $name {
            /// Total lookup: every raw id yields a value of this type.
            $vis fn from_id(id: $raw) -> Self {
                match id {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }

            /// Raw numeric id.
            $vis fn id(self) -> $raw {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(id) => id,
                }
            }

            /// Wire-format constant name; `None` for unknown ids.
            $vis fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($wire),)+
                    Self::Unknown(_) => None,
                }
            }
        }
    };
}

pub(crate) use id_registry;
