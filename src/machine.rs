pub const PTR_SIZE: usize = std::mem::size_of::<*const ()>();

/// Unsigned integer that is 4 bytes wide on both ILP32 and LP64 targets.
pub type Ub4 = u32;

pub type Word = isize;

assert_eq_size!(Ub4, [u8; 4]);
assert_eq_size!(Word, *const ());

const_assert!(PTR_SIZE.is_power_of_two());
const_assert!(PTR_SIZE >= 4);
