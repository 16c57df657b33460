use crate::encoding::prefix_width::PrefixWidth;

/// The HPACK field representations that start with a prefix integer
/// (RFC 7541 §6), plus the string length prefixes (§5.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Representation {
    /// Indexed header field
    Indexed,
    /// Literal header field with incremental indexing
    Dynamic,
    /// Literal header field without indexing
    Literal,
    /// Literal header field never indexed
    Never,
    /// Dynamic table size update
    Update,
    StringRaw,
    StringHuffman,
}

impl Representation {
    pub const ALL: [Representation; 7] = [
        Representation::Indexed,
        Representation::Dynamic,
        Representation::Literal,
        Representation::Never,
        Representation::Update,
        Representation::StringRaw,
        Representation::StringHuffman,
    ];

    pub fn prefix_width(&self) -> PrefixWidth {
        match self {
            Representation::Indexed => PrefixWidth::fixed(7),
            Representation::Dynamic => PrefixWidth::fixed(6),
            Representation::Literal => PrefixWidth::fixed(4),
            Representation::Never => PrefixWidth::fixed(4),
            Representation::Update => PrefixWidth::fixed(5),
            Representation::StringRaw => PrefixWidth::fixed(7),
            Representation::StringHuffman => PrefixWidth::fixed(7),
        }
    }

    /// The bits above the prefix that identify the representation.
    pub fn pattern(&self) -> u8 {
        match self {
            Representation::Indexed => 0b1000_0000,
            Representation::Dynamic => 0b0100_0000,
            Representation::Literal => 0b0000_0000,
            Representation::Never => 0b0001_0000,
            Representation::Update => 0b0010_0000,
            Representation::StringRaw => 0b0000_0000,
            Representation::StringHuffman => 0b1000_0000,
        }
    }
}
