/// Error during name table emission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A name is longer than an offset entry can describe.
    #[error("name too long ({len} bytes): {name}")]
    EncodingTooLarge { name: String, len: usize },

    /// A zero length would read as a gap sentinel.
    #[error("flag at bit {bit} has an empty name")]
    EmptyName { bit: u32 },

    #[error("type {type_name} has no single-bit constants")]
    NoFlags { type_name: String },
}
