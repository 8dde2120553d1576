#[doc(inline)]
pub use factors::{self, *};
#[doc(inline)]
pub use tau::{self, *};
