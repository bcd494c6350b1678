use miette::{IntoDiagnostic, Result};
use std::path::Path;
use swatch_ase::{
    decode, encode, AseWriter, Color, ColorModel, ColorType, Document, Group, GroupMode,
};
use tracing::{info, instrument};
use tracing_test::traced_test;

#[instrument(skip_all, fields(file=%path.file_name().unwrap().to_string_lossy()))]
fn validate_ase_rewrite(path: &Path) -> Result<()> {
    let expected = std::fs::read(path).into_diagnostic()?;
    let document = decode(expected.as_slice(), GroupMode::Nested)?;

    info!(blocks = document.block_count(), "re-encoding");
    let actual = encode(&document, Vec::<u8>::new())?;

    assert_eq!(actual.len(), expected.len());
    assert_eq!(actual, expected);

    Ok(())
}

#[traced_test]
#[test]
fn rewrite_sample() -> Result<()> {
    validate_ase_rewrite(&Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/sample.ase"))
}

#[traced_test]
#[test]
fn write_then_read_group() -> Result<()> {
    let colors = ["Red", "Green", "Blue"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut values = vec![0.0f32; 3];
            values[i] = 1.0;
            Color::builder()
                .name(*name)
                .model(ColorModel::Rgb)
                .values(values)
                .build()
        })
        .collect::<Vec<_>>();
    let document = Document::new(Vec::new(), vec![Group::new("A Color Group", colors)]);

    let bytes = encode(&document, Vec::<u8>::new())?;
    assert_eq!(&bytes[8..12], &[0x00, 0x00, 0x00, 0x05]);

    let decoded = decode(bytes.as_slice(), GroupMode::Nested)?;
    assert_eq!(decoded, document);
    assert!(decoded.colors.is_empty());

    Ok(())
}

#[traced_test]
#[test]
fn write_non_ascii_names() -> Result<()> {
    let mut ase = AseWriter::new(Vec::<u8>::new());
    ase.start_group("Farben \u{1F3A8}")?;
    ase.write_color(
        &Color::builder()
            .name("Grün")
            .model(ColorModel::Lab)
            .values(vec![0.5, -60.0, 40.0])
            .kind(ColorType::Spot)
            .build(),
    )?;
    ase.write_color(
        &Color::builder()
            .name("")
            .model(ColorModel::Gray)
            .values(vec![0.0])
            .build(),
    )?;
    let bytes = ase.finish()?;

    let document = decode(bytes.as_slice(), GroupMode::Nested)?;
    let group = &document.groups[0];
    assert_eq!(group.name, "Farben \u{1F3A8}");
    assert_eq!(group.colors[0].name, "Grün");
    assert_eq!(group.colors[0].kind, ColorType::Spot);
    assert_eq!(group.colors[1].name, "");

    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn document_from_json() -> Result<()> {
    let json = r#"{
        "colors": [
            { "name": "Paper", "model": "Gray", "values": [1.0] }
        ],
        "groups": [
            { "name": "Inks", "colors": [
                { "name": "Cyan", "model": "CMYK", "values": [1.0, 0.0, 0.0, 0.0], "type": "Spot" }
            ] }
        ]
    }"#;

    let document: Document = serde_json::from_str(json).into_diagnostic()?;
    let document = Document::new(document.colors, document.groups);
    assert_eq!(document.header.blocks, 4);
    assert_eq!(document.colors[0].kind, ColorType::Global);

    let decoded = decode(encode(&document, Vec::<u8>::new())?.as_slice(), GroupMode::Nested)?;
    assert_eq!(decoded, document);

    Ok(())
}
