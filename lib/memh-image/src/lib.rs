mod encode;
mod endian;
mod error;
pub mod layout;

pub use encode::{convert_file, encode, encode_to, Summary};
pub use endian::ByteOrder;
pub use error::ConvertError;
pub use layout::ImageLayout;
