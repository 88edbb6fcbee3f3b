use crate::error::ConvertError;
use crate::layout::ImageLayout;
use memh_util::U8SliceUtils;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub words: usize,
    pub dropped: usize,
}

/// Writes every complete word of `data` as four lowercase hex pairs, each
/// followed by a space. `path` only feeds the byte order marker test.
pub fn encode_to<W: Write>(
    data: &[u8],
    path: &Path,
    layout: &ImageLayout,
    out: &mut W,
) -> io::Result<Summary> {
    let force_big = layout.force_big_for(path);

    if force_big {
        debug!(path = %path.display(), "marker found, whole image is big-endian");
    }

    let words = data.words();
    let dropped = words.remainder().len();
    let mut count = 0;

    for (offset, word) in words {
        let [a, b, c, d] = layout.order_at(offset, force_big).render(word);

        write!(out, "{:02x} {:02x} {:02x} {:02x} ", a, b, c, d)?;
        count += 1;
    }

    Ok(Summary {
        words: count,
        dropped,
    })
}

pub fn encode(data: &[u8], path: &Path, layout: &ImageLayout) -> String {
    let mut out = Vec::with_capacity(data.len() / 4 * 12);

    // Writing into a Vec can't fail
    let _ = encode_to(data, path, layout, &mut out);

    String::from_utf8_lossy(&out).into_owned()
}

pub fn convert_file(input: &Path, output: &Path) -> Result<Summary, ConvertError> {
    let layout = ImageLayout::default();

    let data = fs::read(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(output).map_err(write_err)?);
    let summary = encode_to(&data, input, &layout, &mut out).map_err(write_err)?;

    out.flush().map_err(write_err)?;

    Ok(summary)
}
