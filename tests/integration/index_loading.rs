//! Writing, loading and validating `.mdix` files.

use mdindexer::binary::{
    from_bytes, read_header, read_index, read_index_bytes, to_bytes, write_index, IndexFooter,
    IndexHeader, MAGIC, VERSION,
};
use mdindexer::{search, IndexError};
use tempfile::TempDir;

use super::common::{assert_index_well_formed, bar_md, baz_md, foo_md, index_of};

fn sample() -> mdindexer::InvertedIndex {
    let index = index_of(&[foo_md(), bar_md(), baz_md(&["hello", "ciao", "extra"])]);
    index.update(&baz_md(&["ciao"]));
    index
}

#[test]
fn test_file_roundtrip_answers_queries_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.mdix");
    let index = sample();

    let written = write_index(&path, &index).unwrap();
    assert_eq!(written as u64, std::fs::metadata(&path).unwrap().len());

    let loaded = read_index(&path).unwrap();
    assert_index_well_formed(&loaded);
    for query in ["hello", "world ciao", "helo wrld", "extra", "ciao hello", "zzz"] {
        assert_eq!(search(query, &loaded), search(query, &index), "query {query:?}");
    }
    assert_eq!(loaded.position("baz.md"), Some(2));
}

#[test]
fn test_loaded_index_accepts_updates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.mdix");
    write_index(&path, &sample()).unwrap();

    let loaded = read_index(&path).unwrap();
    loaded.update(&foo_md());
    loaded.update(&baz_md(&["fresh"]));
    assert_eq!(loaded.document_count(), 3);
    assert!(loaded.contains_word("fresh"));
    // baz.md dropped "ciao"; bar.md still has it.
    assert_eq!(loaded.search("ciao").unwrap().len(), 1);
    assert_index_well_formed(&loaded);
}

#[test]
fn test_header_describes_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.mdix");
    let index = sample();
    write_index(&path, &index).unwrap();

    let bytes = read_index_bytes(&path).unwrap();
    let header = read_header(&bytes).unwrap();
    assert_eq!(header.version, VERSION);
    assert!(header.flags.is_brotli());
    assert_eq!(header.doc_count as usize, index.document_count());
    assert_eq!(header.word_count as usize, index.word_count());
    assert_eq!(
        bytes.len(),
        IndexHeader::SIZE + header.payload_len as usize + IndexFooter::SIZE
    );
}

#[test]
fn test_one_read_serves_header_and_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.mdix");
    write_index(&path, &sample()).unwrap();

    let bytes = read_index_bytes(&path).unwrap();
    let header = read_header(&bytes).unwrap();
    let loaded = from_bytes(&bytes).unwrap();
    assert_eq!(header.doc_count as usize, loaded.document_count());
    assert_eq!(header.word_count as usize, loaded.word_count());

    let err = read_index_bytes(&dir.path().join("missing.mdix")).unwrap_err();
    assert!(matches!(err, IndexError::Read { .. }));
}

#[test]
fn test_every_single_byte_corruption_is_detected() {
    let bytes = to_bytes(&sample()).unwrap();
    for i in 0..bytes.len() {
        let mut damaged = bytes.clone();
        damaged[i] ^= 0x01;
        assert!(from_bytes(&damaged).is_err(), "flip at byte {i} went unnoticed");
    }
}

#[test]
fn test_wrong_magic_is_reported() {
    let mut bytes = to_bytes(&sample()).unwrap();
    bytes[..4].copy_from_slice(b"NOPE");
    let end = bytes.len() - IndexFooter::SIZE;
    let crc = IndexFooter::compute_crc32(&bytes[..end]);
    bytes[end..end + 4].copy_from_slice(&crc.to_le_bytes());

    let err = from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, IndexError::Corrupt(_)));
    assert!(err.to_string().contains("magic"), "{err}");
    assert_ne!(&bytes[..4], &MAGIC);
}

#[test]
fn test_missing_file_is_read_error() {
    let err = read_index(std::path::Path::new("does/not/exist.mdix")).unwrap_err();
    assert!(matches!(err, IndexError::Read { .. }));
}
