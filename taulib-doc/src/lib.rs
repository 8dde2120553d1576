//! 約数まわりの詰め合わせ。

#[doc(inline)]
pub use math::{self, *};
