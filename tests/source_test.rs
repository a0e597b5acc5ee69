//! Retrieval and transcoding of source documents from disk and HTTP

use kodegen_tools_lexscrape::source::{fetch_source, read_source};
use kodegen_tools_lexscrape::{ConversionConfig, ConversionError, convert_html_to_markdown, load_source};
use mockito::Server;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;
use common::create_html_mock;

const LATIN1_PAGE: &[u8] = b"<html><body><h2>Ley Org\xe1nica</h2><h4>Secci\xf3n 1</h4></body></html>";

#[tokio::test]
async fn test_fetch_uses_content_type_charset() {
    let mut server = Server::new_async().await;
    let mock = create_html_mock(&mut server, "/lo1.html", "text/html; charset=ISO-8859-1", LATIN1_PAGE);

    let config = ConversionConfig::default();
    let url = format!("{}/lo1.html", server.url());
    let source = load_source(&url, &config).await.unwrap();
    mock.assert();

    assert_eq!(source.origin, url);
    assert_eq!(source.declared_charset.as_deref(), Some("ISO-8859-1"));

    let decoded = source.decode(&config).unwrap();
    assert_eq!(decoded.encoding, "windows-1252");
    assert!(!decoded.had_errors);

    let output = convert_html_to_markdown(&decoded.html, &config).unwrap();
    assert_eq!(output.markdown, "Ley Orgánica\n=============\n\n## Sección 1\n");
}

#[tokio::test]
async fn test_fetch_utf8_page_with_wrong_declaration_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = create_html_mock(&mut server, "/mal.html", "text/html; charset=utf-8", LATIN1_PAGE);

    let config = ConversionConfig::default();
    let source = fetch_source(&format!("{}/mal.html", server.url()), &config).await.unwrap();
    let decoded = source.decode(&config).unwrap();

    // Latin-1 bytes are not valid UTF-8, so the declared charset is abandoned
    assert_eq!(decoded.encoding, "windows-1252");
    assert!(decoded.html.contains("Ley Orgánica"));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("GET", "/missing.html").with_status(404).create_async().await;

    let url = format!("{}/missing.html", server.url());
    let result = fetch_source(&url, &ConversionConfig::default()).await;
    match result {
        Err(ConversionError::HttpStatus { url: failed, status }) => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_oversized_body() {
    let mut server = Server::new_async().await;
    let _mock = create_html_mock(&mut server, "/big.html", "text/html", &[b'a'; 64]);

    let config = ConversionConfig::builder().max_input_bytes(16).build().unwrap();
    let result = fetch_source(&format!("{}/big.html", server.url()), &config).await;
    assert!(matches!(result, Err(ConversionError::InputTooLarge { limit: 16, .. })));
}

#[tokio::test]
async fn test_read_local_file_sniffs_meta_charset() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        "<html><head><meta charset=\"utf-8\"></head><body><h2>Año</h2></body></html>".as_bytes(),
    )
    .unwrap();

    let config = ConversionConfig::default();
    let path = file.path().to_str().unwrap().to_string();
    let source = load_source(&path, &config).await.unwrap();
    assert_eq!(source.declared_charset, None);

    let decoded = source.decode(&config).unwrap();
    assert_eq!(decoded.encoding, "UTF-8");
    assert!(decoded.html.contains("<h2>Año</h2>"));
}

#[tokio::test]
async fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_source(&dir.path().join("nope.html"), &ConversionConfig::default()).await;
    assert!(matches!(result, Err(ConversionError::Io(_))));
}

#[tokio::test]
async fn test_read_rejects_oversized_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'x'; 128]).unwrap();

    let config = ConversionConfig::builder().max_input_bytes(100).build().unwrap();
    let result = read_source(file.path(), &config).await;
    assert!(matches!(result, Err(ConversionError::InputTooLarge { size: 128, limit: 100 })));
}

#[tokio::test]
async fn test_forced_encoding_ignores_declaration() {
    let mut server = Server::new_async().await;
    let _mock = create_html_mock(&mut server, "/f.html", "text/html; charset=utf-8", LATIN1_PAGE);

    let config = ConversionConfig::builder()
        .source_encoding("latin1")
        .force_encoding(true)
        .build()
        .unwrap();
    let source = fetch_source(&format!("{}/f.html", server.url()), &config).await.unwrap();
    let decoded = source.decode(&config).unwrap();
    assert_eq!(decoded.encoding, "windows-1252");
    assert!(!decoded.had_errors);
}
