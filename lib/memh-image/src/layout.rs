use crate::endian::ByteOrder;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::path::Path;
use subslice::SubsliceExt;

pub const BOOT_REGION_END: usize = 0x2000;
pub const BIG_ENDIAN_MARKER: &str = "fence_i";

/// Where the big-endian part of an instruction memory image ends, and which
/// file name marks an image that is big-endian throughout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ImageLayout {
    pub boot_region_end: usize,
    pub big_endian_marker: String,
}

impl Default for ImageLayout {
    fn default() -> ImageLayout {
        ImageLayout {
            boot_region_end: BOOT_REGION_END,
            big_endian_marker: BIG_ENDIAN_MARKER.to_owned(),
        }
    }
}

impl ImageLayout {
    /// Matches against the path exactly as given, directories included.
    pub fn force_big_for(&self, path: &Path) -> bool {
        path.as_os_str()
            .as_encoded_bytes()
            .find(self.big_endian_marker.as_bytes())
            .is_some()
    }

    pub fn order_at(&self, offset: usize, force_big: bool) -> ByteOrder {
        if force_big || offset < self.boot_region_end {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}
