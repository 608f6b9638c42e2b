use crate::machine::Word;

pub const TRUE: Word = 1;
pub const FALSE: Word = 0;
