//! Shared page resources: standard-14 font references and image XObjects.

use crate::writer::PdfWriter;
use billforge_layout::{EmbeddedImage, LaidOutDocument, LayoutElement};
use billforge_render_core::RenderError;
use billforge_style::{FontFamily, FontWeight};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Object, Stream, dictionary};
use std::io::{Seek, Write};
use std::sync::Arc;

/// Resource names (`F1`, `Im1`, ...) assigned in first-use order, so the
/// same layout always produces the same names.
#[derive(Debug, Default)]
pub struct ResourceNames {
    fonts: Vec<(FontFamily, FontWeight)>,
    images: Vec<Arc<EmbeddedImage>>,
}

impl ResourceNames {
    pub fn collect(document: &LaidOutDocument) -> Self {
        let mut names = ResourceNames {
            images: document.images(),
            ..Default::default()
        };
        let texts = document
            .pages
            .iter()
            .flat_map(|page| &page.elements)
            .filter_map(|el| match &el.element {
                LayoutElement::Text(text) => Some((text.style.family, text.style.weight)),
                _ => None,
            });
        for font in texts {
            if !names.fonts.contains(&font) {
                names.fonts.push(font);
            }
        }
        names
    }

    pub fn font(&self, family: FontFamily, weight: FontWeight) -> Option<String> {
        self.fonts
            .iter()
            .position(|&f| f == (family, weight))
            .map(|i| format!("F{}", i + 1))
    }

    pub fn image(&self, image: &Arc<EmbeddedImage>) -> Option<String> {
        self.images
            .iter()
            .position(|i| Arc::ptr_eq(i, image))
            .map(|i| format!("Im{}", i + 1))
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Buffer the image XObjects and return the shared resources dictionary.
    pub fn write_resources<W: Write + Seek>(&self, writer: &mut PdfWriter<W>) -> Result<Dictionary, RenderError> {
        let mut font_dict = Dictionary::new();
        for (i, (family, weight)) in self.fonts.iter().enumerate() {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => family.postscript_name(*weight),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(format!("F{}", i + 1).into_bytes(), Object::Dictionary(single_font_dict));
        }

        let mut xobjects = Dictionary::new();
        for (i, image) in self.images.iter().enumerate() {
            let id = write_image(writer, image)?;
            xobjects.set(format!("Im{}", i + 1).into_bytes(), id);
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        Ok(resources)
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// An RGB image XObject, with a grayscale soft mask when it has alpha.
fn write_image<W: Write + Seek>(
    writer: &mut PdfWriter<W>,
    image: &EmbeddedImage,
) -> Result<lopdf::ObjectId, RenderError> {
    let width = image.width as i64;
    let height = image.height as i64;

    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width,
        "Height" => height,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };

    if let Some(alpha) = &image.alpha {
        let mask = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            deflate(alpha)?,
        );
        let mask_id = writer.buffer_object(Object::Stream(mask));
        dict.set("SMask", mask_id);
    }

    let stream = Stream::new(dict, deflate(&image.rgb)?);
    Ok(writer.buffer_object(Object::Stream(stream)))
}
