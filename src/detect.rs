//! SVG format detection.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// SVG format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgFormat {
    /// Whether the document starts with an `<?xml ...?>` declaration
    pub has_xml_declaration: bool,
    /// Whether a `<!DOCTYPE` appears before the root element
    pub has_doctype: bool,
}

impl std::fmt::Display for SvgFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_xml_declaration {
            write!(f, "SVG (XML)")
        } else {
            write!(f, "SVG")
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const XML_DECLARATION: &[u8] = b"<?xml";
const DOCTYPE: &[u8] = b"<!DOCTYPE";
const SVG_TAG: &[u8] = b"<svg";

/// Detect SVG format from a file path.
///
/// # Example
/// ```no_run
/// use svgpdf::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("drawing.svg").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SvgFormat> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Error::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    detect_format_from_bytes(&data)
}

/// Detect SVG format from a whole document.
///
/// Any amount of prolog (comments, declarations, a DOCTYPE internal subset)
/// may precede the root tag.
///
/// # Returns
/// * `Ok(SvgFormat)` if the data looks like an SVG document
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SvgFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or(Error::UnknownFormat)?;
    let data = &data[start..];

    if data.first() != Some(&b'<') {
        return Err(Error::UnknownFormat);
    }

    let svg_at = find(data, SVG_TAG).ok_or(Error::UnknownFormat)?;

    Ok(SvgFormat {
        has_xml_declaration: data.starts_with(XML_DECLARATION),
        has_doctype: find(&data[..svg_at], DOCTYPE).is_some(),
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Check if a file looks like SVG.
pub fn is_svg<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like SVG.
pub fn is_svg_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
