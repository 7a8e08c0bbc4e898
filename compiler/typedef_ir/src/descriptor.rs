//! Static type descriptors.
//!
//! A `TypeDescriptor` is the front-end's view of a type at analysis time:
//! primitives, declared (nominal) types with generic arguments, arrays,
//! type variables and wildcards. Descriptors are immutable values.
//!
//! The `Display` impl renders the canonical name used as the key of every
//! produced `TypeDefinition`, e.g. `java.util.Map<java.lang.String,int[]>`.

use std::fmt;

/// Built-in primitive kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Char,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Void,
    ];

    /// Source keyword for this primitive.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    /// Look up a primitive by its source keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Bound on a wildcard argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    /// `? extends T`
    Extends(Box<TypeDescriptor>),
    /// `? super T`
    Super(Box<TypeDescriptor>),
}

/// Opaque handle to a static type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Built-in primitive (`int`, `boolean`, ...).
    Primitive(PrimitiveKind),

    /// Nominal class, interface or enum reference.
    Declared {
        /// Fully-qualified name of the declaration.
        name: String,
        /// Generic arguments, empty for raw or non-generic uses.
        args: Vec<TypeDescriptor>,
    },

    /// Array of a component type.
    Array(Box<TypeDescriptor>),

    /// Generic type parameter (`T`).
    TypeVariable {
        /// Parameter name.
        name: String,
    },

    /// Wildcard argument (`?`, `? extends T`, `? super T`).
    Wildcard {
        /// Optional bound.
        bound: Option<WildcardBound>,
    },
}

impl TypeDescriptor {
    /// A primitive type.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }

    /// A non-generic declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        TypeDescriptor::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A parameterized declared type.
    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Declared {
            name: name.into(),
            args,
        }
    }

    /// An array of `component`.
    pub fn array(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    /// A type variable.
    pub fn type_variable(name: impl Into<String>) -> Self {
        TypeDescriptor::TypeVariable { name: name.into() }
    }

    /// An unbounded wildcard.
    pub fn wildcard() -> Self {
        TypeDescriptor::Wildcard { bound: None }
    }

    /// `? extends bound`
    pub fn wildcard_extends(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            bound: Some(WildcardBound::Extends(Box::new(bound))),
        }
    }

    /// `? super bound`
    pub fn wildcard_super(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard {
            bound: Some(WildcardBound::Super(Box::new(bound))),
        }
    }

    /// The canonical string form of this type.
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }

    /// Name of the declaration this type refers to, if it is a declared type.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Generic arguments of a declared type; empty for every other shape.
    pub fn type_args(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::Declared { args, .. } => args,
            _ => &[],
        }
    }

    /// Component type of an array.
    pub fn component(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array(component) => Some(component),
            _ => None,
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    #[inline]
    pub fn is_declared(&self) -> bool {
        matches!(self, TypeDescriptor::Declared { .. })
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Declared { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(",")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeDescriptor::Array(component) => write!(f, "{component}[]"),
            TypeDescriptor::TypeVariable { name } => f.write_str(name),
            TypeDescriptor::Wildcard { bound: None } => f.write_str("?"),
            TypeDescriptor::Wildcard {
                bound: Some(WildcardBound::Extends(bound)),
            } => write!(f, "? extends {bound}"),
            TypeDescriptor::Wildcard {
                bound: Some(WildcardBound::Super(bound)),
            } => write!(f, "? super {bound}"),
        }
    }
}
