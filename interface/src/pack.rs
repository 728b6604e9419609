use core::mem::MaybeUninit;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// # Safety
///
/// Implementor guarantees:
/// - `size_of::<Self>() == LEN`
/// - `#[repr(C)]` or `#[repr(transparent)]`
/// - No padding bytes left uninitialized
/// - No invalid bit patterns for `Self`
///
/// Implementors are `Transmutable` state/instruction types whose `LEN` matches
/// `Transmutable::LEN`, asserted at each impl site with `static_assertions`.
pub unsafe trait AsSlice<const LEN: usize>: Sized {
    /// Returns `Self` as a referenced byte array.
    #[inline(always)]
    fn as_slice(&self) -> &[u8; LEN] {
        unsafe { &*(self as *const Self as *const [u8; LEN]) }
    }
}
