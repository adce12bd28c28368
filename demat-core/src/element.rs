use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

/// Numeric element of a dense matrix.
///
/// Implemented for the two supported storage types, `i32` and `f32`. The
/// `to_float`/`from_float` pair is the promotion contract used by row
/// elimination: multipliers are always computed in `f32`, and the combined
/// value is narrowed back to the storage type on write. For `i32` that
/// narrowing truncates toward zero; for `f32` both directions are the
/// identity.
pub trait Element: Copy + Debug + Default + Pod + Num {
    /// Promotes the element to the `f32` arithmetic domain.
    fn to_float(self) -> f32;

    /// Narrows an `f32` intermediate back to the storage type.
    fn from_float(value: f32) -> Self;
}

impl Element for i32 {
    fn to_float(self) -> f32 {
        self as f32
    }

    fn from_float(value: f32) -> Self {
        value as i32
    }
}

impl Element for f32 {
    fn to_float(self) -> f32 {
        self
    }

    fn from_float(value: f32) -> Self {
        value
    }
}
