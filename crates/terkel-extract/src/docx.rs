//! DOCX extraction: unzip the container, stream the body XML

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Extract text from DOCX bytes.
///
/// The document body is streamed event by event; run text (`w:t`) inside a
/// paragraph (`w:p`) accumulates into one line. Paragraphs empty after
/// trimming are dropped and the rest join with a single newline. Tag names
/// are matched with the conventional `w:` prefix.
///
/// # Errors
/// Returns an archive error if the bytes are not a readable zip,
/// `MissingDocumentXml` if the archive lacks a body part, and an XML error
/// if the body is malformed.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::DocxArchive(e.to_string()))?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_XML) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)
                .map_err(|e| ExtractError::DocxArchive(e.to_string()))?;
        }
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentXml),
        Err(e) => return Err(ExtractError::DocxArchive(e.to_string())),
    }

    debug!("DOCX body is {} bytes of XML", xml.len());
    parse_document_xml(&xml)
}

/// Paragraph state machine over the body XML event stream.
struct ParagraphCollector {
    paragraphs: Vec<String>,
    current: String,
    in_text_run: bool,
}

impl ParagraphCollector {
    fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            current: String::new(),
            in_text_run: false,
        }
    }

    fn handle_start(&mut self, e: &quick_xml::events::BytesStart<'_>) {
        match e.name().as_ref() {
            b"w:p" => self.current.clear(),
            b"w:t" => self.in_text_run = true,
            _ => {}
        }
    }

    fn handle_text(&mut self, e: &quick_xml::events::BytesText<'_>) -> Result<(), ExtractError> {
        if !self.in_text_run {
            return Ok(());
        }
        let text = e
            .unescape()
            .map_err(|err| ExtractError::DocxXml(err.to_string()))?;
        self.current.push_str(&text);
        Ok(())
    }

    fn handle_end(&mut self, e: &quick_xml::events::BytesEnd<'_>) {
        match e.name().as_ref() {
            b"w:p" => {
                let paragraph = std::mem::take(&mut self.current);
                if !paragraph.trim().is_empty() {
                    self.paragraphs.push(paragraph);
                }
            }
            b"w:t" => self.in_text_run = false,
            _ => {}
        }
    }
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut collector = ParagraphCollector::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => collector.handle_start(e),
            Ok(Event::Text(ref e)) => collector.handle_text(e)?,
            Ok(Event::End(ref e)) => collector.handle_end(e),
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::DocxXml(e.to_string())),
            _ => {}
        }
    }

    Ok(collector.paragraphs.join("\n"))
}
