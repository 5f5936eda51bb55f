/// Generate `ALL`, `as_str`, `Display`, `From<T> for String`, and
/// `TryFrom<String> for T` for a closed tag enum.
///
/// `ALL` lists the variants in declaration order; stages iterate it to
/// produce "one per kind" plans. Add `#[serde(into = "String", try_from = "String")]`
/// to the enum to get Serialize/Deserialize via these impls.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                match s.as_str() {
                    $($str => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }
    };
}

/// Like `string_enum!` but for an enum with a `Custom(String)` fallback.
///
/// `DEFAULTS` lists the named variants only. Unknown strings map to
/// `Custom(s)`; empty strings are rejected.
macro_rules! string_enum_open {
    ($name:ident, $label:expr, { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const DEFAULTS: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $str,)+
                    $name::Custom(s) => s,
                }
            }

            /// Parse a label case-insensitively, falling back to `Custom`.
            pub fn parse(label: &str) -> Option<Self> {
                let trimmed = label.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lowered = trimmed.to_ascii_lowercase();
                match lowered.as_str() {
                    $($str => Some($name::$variant),)+
                    _ => Some($name::Custom(trimmed.to_string())),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Custom(s) => s,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                match s.as_str() {
                    $($str => Ok($name::$variant),)+
                    "" => Err(format!("{} cannot be empty", $label)),
                    _ => Ok($name::Custom(s)),
                }
            }
        }
    };
}
