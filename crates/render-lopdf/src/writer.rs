use billforge_render_core::RenderError;
use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Buffers PDF objects under stable ids and serializes them in id order.
///
/// Ids 1-3 are reserved for the shared resources, the page tree and the
/// catalog. Nothing time- or randomness-dependent is written, so identical
/// object sets produce identical bytes.
pub struct PdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> PdfWriter<W> {
    pub fn new(mut writer: W, version: &str) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, Dictionary::new().into());

        Ok(Self {
            writer,
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    pub fn set_resources(&mut self, resources: Dictionary) {
        self.buffer_object_at_id(self.resources_id, resources.into());
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn add_page(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self, info: Dictionary) -> Result<W, RenderError> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());
        let info_id = self.buffer_object(info.into());

        let mut xref = Xref::new(self.max_id + 1, XrefType::CrossReferenceTable);
        for (id, object) in &self.buffered_objects {
            let offset = self.writer.stream_position()?;
            xref.insert(
                id.0,
                XrefEntry::Normal {
                    offset: offset as u32,
                    generation: id.1 as u16,
                },
            );
            writeln!(self.writer, "{} {} obj", id.0, id.1)?;
            serialize::object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        serialize::xref_table(&mut self.writer, &xref)?;

        let trailer = dictionary! { "Size" => xref.size as i64, "Root" => self.catalog_id, "Info" => info_id };
        writeln!(self.writer, "trailer")?;
        serialize::dictionary(&mut self.writer, &trailer)?;
        write!(self.writer, "\nstartxref\n{}\n%%EOF", xref_start)?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Serialization for the object kinds the renderer produces: dictionaries
/// with sorted keys, arrays, names, numbers, literal strings, references
/// and streams.
mod serialize {
    use lopdf::xref::{Xref, XrefEntry};
    use lopdf::{Dictionary, Object, StringFormat};
    use std::io::{self, Write};

    pub fn object(writer: &mut dyn Write, value: &Object) -> io::Result<()> {
        match value {
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(name) => {
                writer.write_all(b"/")?;
                writer.write_all(name)
            }
            Object::String(bytes, StringFormat::Literal) => literal_string(writer, bytes),
            Object::Array(items) => {
                writer.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
            other => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported PDF object: {:?}", other),
            )),
        }
    }

    fn literal_string(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
        writer.write_all(b"(")?;
        for &byte in bytes {
            if matches!(byte, b'(' | b')' | b'\\') {
                writer.write_all(b"\\")?;
            }
            writer.write_all(&[byte])?;
        }
        writer.write_all(b")")
    }

    pub fn dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        let mut entries: Vec<_> = dict.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        writer.write_all(b"<<")?;
        for (key, value) in entries {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// One subsection covering ids `0..xref.size`; ids never written are free.
    pub fn xref_table(writer: &mut dyn Write, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref\n0 {}", xref.size)?;
        for id in 0..xref.size {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?
                }
                _ => writeln!(writer, "0000000000 65535 f ")?,
            }
        }
        Ok(())
    }
}
