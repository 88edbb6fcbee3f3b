mod iter;

pub use iter::*;

pub trait U8SliceUtils {
    fn read_u32_le(&self) -> u32;
    fn words(&self) -> Words<'_>;
}

impl U8SliceUtils for [u8] {
    #[inline(always)]
    fn read_u32_le(&self) -> u32 {
        (self[3] as u32) << 24 | (self[2] as u32) << 16 | (self[1] as u32) << 8 | self[0] as u32
    }

    fn words(&self) -> Words<'_> {
        Words::new(self)
    }
}
