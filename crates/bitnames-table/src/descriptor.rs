//! Descriptor packaging: one runtime value per flag type, decoded at `u64`.
//!
//! Generated code in this packaging embeds a `static` [`Descriptor`] holding
//! the type's table and calls [`Descriptor::mstring_widened`] with the raw
//! field value. All types share the single `u64` instance of the decoder.

use crate::bits::{Bits, FlagRepr};
use crate::stringer::Stringer;

/// Stringer widened to 64 bits.
pub type Descriptor = Stringer<'static, u64>;

impl Stringer<'_, u64> {
    /// Render a value of any declared representation.
    ///
    /// The value is reinterpreted as unsigned at its own width before being
    /// widened, so signed and unsigned types of equal width decode alike.
    pub fn mstring_widened<R: FlagRepr>(&self, value: R) -> String {
        self.mstring(value.to_bits().to_u64())
    }
}
