//! PNG encoding for bitmaps embedded in the page

use crate::{assets::EncodedImage, Result};
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;

pub fn encode_png(bitmap: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    bitmap.write_to(&mut buf, ImageOutputFormat::Png)?;
    Ok(buf.into_inner())
}

/// `data:image/png;base64,...` for use in an `<img src>`
pub fn png_data_uri(bitmap: &DynamicImage) -> Result<String> {
    let png = encode_png(bitmap)?;
    Ok(EncodedImage::from_bytes(&png).data_uri())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::placeholder_profile;

    #[test]
    fn placeholder_encodes_as_png() {
        let png = encode_png(&placeholder_profile()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let back = image::load_from_memory(&png).unwrap();
        assert_eq!(back.width(), 300);
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let uri = png_data_uri(&placeholder_profile()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
