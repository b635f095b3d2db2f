use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::core::contig::Contig;
use crate::core::dictionary::{DictionaryError, SequenceDictionary};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SAM header format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid sequence dictionary: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// The parts of an alignment file header the remap subsystem consumes
#[derive(Debug, Clone)]
pub struct AlignmentHeader {
    /// `@SQ` entries in header order
    pub dictionary: SequenceDictionary,

    /// Full header text, used for `@PG` lookups
    pub text: String,
}

/// Read the header of a SAM/BAM/CRAM file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::UnsupportedFormat` for unknown extensions, or
/// `ParseError::Dictionary` if a sequence name repeats.
pub fn read_alignment_header(path: &Path) -> Result<AlignmentHeader, ParseError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let header = match extension.as_deref() {
        Some("sam") | None => read_sam_header(path)?,
        Some("bam") => read_bam_header(path)?,
        Some("cram") => read_cram_header(path)?,
        Some(ext) => return Err(ParseError::UnsupportedFormat(ext.to_string())),
    };

    to_alignment_header(&header)
}

fn read_sam_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::sam;

    let mut reader = std::fs::File::open(path)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

fn read_bam_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

fn read_cram_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::cram;

    let mut reader = std::fs::File::open(path).map(cram::io::Reader::new)?;

    reader
        .read_file_definition()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    reader
        .read_file_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

/// Convert a noodles header into the dictionary plus serialized text
fn to_alignment_header(header: &noodles::sam::Header) -> Result<AlignmentHeader, ParseError> {
    let contigs = header
        .reference_sequences()
        .iter()
        .map(|(name, map)| Contig::new(name.to_string(), map.length().get() as u64))
        .collect();

    let mut writer = noodles::sam::io::Writer::new(Vec::new());
    writer.write_header(header)?;
    let text = String::from_utf8(writer.into_inner())
        .map_err(|e| ParseError::InvalidFormat(format!("header is not UTF-8: {e}")))?;

    Ok(AlignmentHeader {
        dictionary: SequenceDictionary::new(contigs)?,
        text,
    })
}

/// Build an alignment header from raw SAM header text
///
/// Only `@SQ` lines contribute to the dictionary; lines without both `SN` and
/// `LN` are rejected since every reference must be matched by name and length.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if an `@SQ` line lacks `SN` or has a
/// missing or non-integer `LN`, or `ParseError::Dictionary` on repeated names.
pub fn parse_header_text(text: &str) -> Result<AlignmentHeader, ParseError> {
    let mut contigs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if !line.starts_with("@SQ\t") {
            continue;
        }

        let mut name: Option<&str> = None;
        let mut length: Option<&str> = None;

        for field in line.split('\t').skip(1) {
            if let Some((tag, value)) = field.split_once(':') {
                match tag {
                    "SN" => name = Some(value),
                    "LN" => length = Some(value),
                    _ => {}
                }
            }
        }

        let line_num = i + 1;
        let name = name.ok_or_else(|| {
            ParseError::InvalidFormat(format!("@SQ on line {line_num} has no SN tag"))
        })?;
        let length: u64 = length.and_then(|l| l.parse().ok()).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "@SQ for sequence '{name}' on line {line_num} has a missing or invalid LN tag"
            ))
        })?;

        contigs.push(Contig::new(name, length));
    }

    Ok(AlignmentHeader {
        dictionary: SequenceDictionary::new(contigs)?,
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_text() {
        let header = "@HD\tVN:1.6\tSO:unsorted\n\
                      @SQ\tSN:ENST2\tLN:200\n\
                      @SQ\tSN:ENST1\tLN:100\n\
                      @PG\tID:rsem\tPN:rsem\n";

        let parsed = parse_header_text(header).unwrap();
        assert_eq!(parsed.dictionary.len(), 2);
        assert_eq!(parsed.dictionary.get(0).unwrap().name, "ENST2");
        assert_eq!(parsed.dictionary.get(1).unwrap().length, 100);
        assert_eq!(parsed.text, header);
    }

    #[test]
    fn test_parse_header_text_no_sq() {
        let parsed = parse_header_text("@HD\tVN:1.6\n").unwrap();
        assert!(parsed.dictionary.is_empty());
    }

    #[test]
    fn test_parse_header_text_missing_length() {
        let result = parse_header_text("@SQ\tSN:ENST1\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = parse_header_text("@SQ\tSN:ENST1\tLN:ten\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_header_text_duplicate() {
        let result = parse_header_text("@SQ\tSN:ENST1\tLN:100\n@SQ\tSN:ENST1\tLN:100\n");
        assert!(matches!(result, Err(ParseError::Dictionary(_))));
    }

    #[test]
    fn test_read_sam_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.sam");
        std::fs::write(
            &path,
            "@HD\tVN:1.6\n@SQ\tSN:ENST1\tLN:100\n@SQ\tSN:ENST2\tLN:200\n@PG\tID:rsem\tPN:rsem\n",
        )
        .unwrap();

        let header = read_alignment_header(&path).unwrap();
        assert_eq!(header.dictionary.len(), 2);
        assert_eq!(header.dictionary.id_of("ENST2"), Some(1));
        assert!(header.text.contains("@PG\tID:rsem"));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = read_alignment_header(Path::new("reads.fastq"));
        assert!(matches!(result, Err(ParseError::UnsupportedFormat(_))));
    }
}
