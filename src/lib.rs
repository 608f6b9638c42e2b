#[macro_use]
extern crate static_assertions;

pub mod bits;
pub mod error;
pub mod machine;
pub mod truth;
pub mod utils;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use crate::bits::{bic, bis, bit};
    pub use crate::error::AlignError;
    pub use crate::machine::{Ub4, Word, PTR_SIZE};
    pub use crate::truth::{FALSE, TRUE};
    pub use crate::utils::{abs, align, align_to, checked_align_to, max, min};
}

pub use prelude::*;
