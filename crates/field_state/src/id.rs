//! Opaque identifier for an enhanced field.
//!
//! A plain `u64` wrapper so this crate stays decoupled from any DOM or
//! framework id type; integration layers provide the conversions.

/// Key for one field in a [`FieldStore`](crate::FieldStore).
///
/// The value carries no meaning here; it is whatever identity the host's
/// element tree uses, widened to `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}
