//! Primitive JSON types and their per-type `format` vocabularies.

use std::fmt;

/// The six primitive values of the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Boolean,
    Object,
    Array,
    Number,
    Integer,
    String,
}

impl JsonType {
    pub const ALL: [JsonType; 6] = [
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Number,
        Self::Integer,
        Self::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `format` vocabulary owned by one primitive type.
///
/// `Default` is the unspecified format, which is never written to the wire.
pub trait OpenApiFormat: Clone + PartialEq + fmt::Debug + Default {
    /// The primitive type this vocabulary belongs to.
    const JSON_TYPE: JsonType;

    fn unspecified() -> Self {
        Self::default()
    }

    /// Maps a wire value onto the vocabulary. Unknown values are kept as
    /// `Other`.
    fn from_raw(raw: &str) -> Self;

    /// Wire value, or `None` for the unspecified format.
    fn raw(&self) -> Option<&str>;

    fn is_unspecified(&self) -> bool {
        self.raw().is_none()
    }
}

macro_rules! format_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident => $json_type:ident { $($variant:ident = $raw:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            Unspecified,
            $($variant,)*
            /// A format outside the known vocabulary, kept verbatim.
            Other(String),
        }

        impl OpenApiFormat for $name {
            const JSON_TYPE: JsonType = JsonType::$json_type;

            fn from_raw(raw: &str) -> Self {
                match raw {
                    $($raw => Self::$variant,)*
                    other => Self::Other(other.to_string()),
                }
            }

            fn raw(&self) -> Option<&str> {
                match self {
                    Self::Unspecified => None,
                    $(Self::$variant => Some($raw),)*
                    Self::Other(raw) => Some(raw.as_str()),
                }
            }
        }
    };
}

format_vocabulary! {
    /// Formats of `type: boolean`.
    BooleanFormat => Boolean {}
}

format_vocabulary! {
    /// Formats of `type: object`.
    ObjectFormat => Object {}
}

format_vocabulary! {
    /// Formats of `type: array`.
    ArrayFormat => Array {}
}

format_vocabulary! {
    /// Formats of `type: number`.
    NumberFormat => Number {
        Float = "float",
        Double = "double",
    }
}

format_vocabulary! {
    /// Formats of `type: integer`.
    IntegerFormat => Integer {
        Int32 = "int32",
        Int64 = "int64",
    }
}

format_vocabulary! {
    /// Formats of `type: string`.
    StringFormat => String {
        Byte = "byte",
        Binary = "binary",
        Date = "date",
        DateTime = "date-time",
        Password = "password",
    }
}

/// A primitive type paired with its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonTypeFormat {
    Boolean(BooleanFormat),
    Object(ObjectFormat),
    Array(ArrayFormat),
    Number(NumberFormat),
    Integer(IntegerFormat),
    String(StringFormat),
}

impl JsonTypeFormat {
    pub fn json_type(&self) -> JsonType {
        match self {
            Self::Boolean(_) => JsonType::Boolean,
            Self::Object(_) => JsonType::Object,
            Self::Array(_) => JsonType::Array,
            Self::Number(_) => JsonType::Number,
            Self::Integer(_) => JsonType::Integer,
            Self::String(_) => JsonType::String,
        }
    }

    /// The `format` keyword value, if one is specified.
    pub fn format_str(&self) -> Option<&str> {
        match self {
            Self::Boolean(f) => f.raw(),
            Self::Object(f) => f.raw(),
            Self::Array(f) => f.raw(),
            Self::Number(f) => f.raw(),
            Self::Integer(f) => f.raw(),
            Self::String(f) => f.raw(),
        }
    }
}
