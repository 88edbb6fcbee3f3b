#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Order in which a word's bytes are emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    pub fn render(self, word: u32) -> [u8; 4] {
        match self {
            ByteOrder::Big => word.to_be_bytes(),
            ByteOrder::Little => word.to_le_bytes(),
        }
    }
}
