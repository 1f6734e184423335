//! Loading application parameter definitions from XML.
//!
//! A file whose declaration names ISO-8859-1 is always read as Latin-1.
//! Otherwise it is read as UTF-8 when valid and as Latin-1 when not, so an
//! undeclared Latin-1 file that happens to be valid UTF-8 is read as UTF-8.
//! The reader fills the model as written; link names are not checked here.

mod error;
mod reader;

use std::borrow::Cow;
use std::path::Path;

use aml_model::Application;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

pub use error::{Result, XmlError};

use reader::ApplicationReader;

/// Path reported in errors for documents parsed from memory.
pub const INLINE_SOURCE: &str = "<inline>";

/// Read and parse an application XML file.
pub fn load_application(path: impl AsRef<Path>) -> Result<Application> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| XmlError::io(path, source))?;
    let xml = decode(path, &bytes)?;
    let app = ApplicationReader::new(path).read(&xml)?;
    debug!(
        path = %path.display(),
        application = %app.name,
        groups = app.groups.len(),
        parameters = app.parameter_count(),
        "loaded application file"
    );
    Ok(app)
}

/// Parse an application document held in memory.
pub fn parse_application(xml: &str) -> Result<Application> {
    ApplicationReader::new(Path::new(INLINE_SOURCE)).read(xml)
}

fn decode<'a>(path: &Path, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(XmlError::Encoding {
            path: path.to_path_buf(),
            message: "UTF-16 documents are not supported".to_string(),
        });
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    if declares_latin1(bytes) {
        return Ok(Cow::Owned(latin1(bytes)));
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => Ok(Cow::Owned(latin1(bytes))),
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// True when the XML declaration names ISO-8859-1 or one of its aliases.
fn declares_latin1(bytes: &[u8]) -> bool {
    let mut reader = Reader::from_reader(bytes);
    let Ok(Event::Decl(decl)) = reader.read_event() else {
        return false;
    };
    let Some(Ok(encoding)) = decl.encoding() else {
        return false;
    };
    matches!(
        encoding.to_ascii_lowercase().as_slice(),
        b"iso-8859-1" | b"iso_8859-1" | b"latin1" | b"latin-1" | b"l1"
    )
}
