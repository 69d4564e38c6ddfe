use std::fmt;

/// Data type inferred for a CSV field or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Base-10 integer, optionally signed.
    Integer,
    /// Decimal or exponential number.
    Float,
    /// `true` or `false`, any case.
    Boolean,
    /// Anything else (fallback type).
    #[default]
    String,
    /// Column without a single non-null value.
    Empty,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Type {
    /// Lowercase label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Float => "float",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Empty => "empty",
        }
    }

    /// Merge two types, returning the most specific type that describes both.
    ///
    /// `Empty` is the identity; integers widen to floats; any other
    /// disagreement falls back to `String`.
    pub fn merge(self, other: Type) -> Type {
        if self == other {
            return self;
        }

        if self == Type::Empty {
            return other;
        }
        if other == Type::Empty {
            return self;
        }

        match (self, other) {
            (Type::Integer, Type::Float) | (Type::Float, Type::Integer) => Type::Float,
            _ => Type::String,
        }
    }
}
