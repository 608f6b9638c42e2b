use std::ops::{BitAnd, BitAndAssign, BitOrAssign, Not};

#[inline]
pub fn bis<T: BitOrAssign>(target: &mut T, mask: T) {
    *target |= mask;
}

#[inline]
pub fn bic<T: BitAndAssign + Not<Output = T>>(target: &mut T, mask: T) {
    *target &= !mask;
}

#[inline]
pub fn bit<T: BitAnd<Output = T>>(target: T, mask: T) -> T {
    target & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bis() {
        let mut x: u8 = 0b0010;
        bis(&mut x, 0b0101);
        assert_eq!(x, 0b0111);
    }

    #[test]
    fn test_bic() {
        let mut x: u8 = 0b0111;
        bic(&mut x, 0b0101);
        assert_eq!(x, 0b0010);
    }

    #[test]
    fn test_bit() {
        assert_eq!(bit(0b0110u32, 0b0011), 0b0010);
        assert_eq!(bit(0b0100u32, 0b0011), 0);
    }
}
