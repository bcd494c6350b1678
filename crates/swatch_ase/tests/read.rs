use std::fs::File;
use std::path::PathBuf;
use swatch_ase::{
    decode,
    error::Error,
    AseReader, Block, ColorModel, ColorType, GroupMode,
};
use tracing::info;
use tracing_test::traced_test;

fn sample_path() -> PathBuf {
    PathBuf::from(format!("{}/resources/sample.ase", env!("CARGO_MANIFEST_DIR")))
}

fn assert_values(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "{a} != {e}");
    }
}

#[traced_test]
#[test]
fn read_sample_nested() -> Result<(), Error> {
    let path = sample_path();
    info!("testing {}", path.display());

    let document = decode(File::open(&path)?, GroupMode::Nested)?;

    assert_eq!(document.header.blocks, 10);
    assert_eq!(document.colors.len(), 5);
    assert_eq!(document.groups.len(), 1);

    let names = document
        .colors
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["RGB", "Grayscale", "cmyk", "LAB", "PANTONE P 1-8 C"]
    );

    let grayscale = &document.colors[1];
    assert_eq!(grayscale.model, ColorModel::Cmyk);
    assert_eq!(grayscale.kind, ColorType::Spot);
    assert_values(&grayscale.values, &[0.0, 0.0, 0.0, 0.47]);

    let pantone = &document.colors[4];
    assert_eq!(pantone.model, ColorModel::Lab);
    assert_values(&pantone.values, &[0.9137255, -5.0, 94.0]);

    let group = document.group("A Color Group").expect("group is present");
    let members = group
        .colors
        .iter()
        .map(|c| (c.name.as_str(), c.kind))
        .collect::<Vec<_>>();
    assert_eq!(
        members,
        vec![
            ("Red", ColorType::Global),
            ("Green", ColorType::Global),
            ("Blue", ColorType::Global),
        ]
    );
    assert_values(&group.colors[1].values, &[0.0, 1.0, 0.0]);

    Ok(())
}

#[traced_test]
#[test]
fn read_sample_flattened() -> Result<(), Error> {
    let document = decode(File::open(sample_path())?, GroupMode::Flattened)?;

    assert_eq!(document.colors.len(), 8);
    assert_eq!(document.colors[5].name, "Red");
    assert_eq!(document.colors[7].name, "Blue");

    assert_eq!(document.groups.len(), 1);
    assert_eq!(document.groups[0].name, "A Color Group");
    assert!(document.groups[0].colors.is_empty());

    Ok(())
}

#[traced_test]
#[test]
fn iterate_sample_blocks() -> Result<(), Error> {
    let reader = AseReader::new(File::open(sample_path())?)?;
    assert_eq!(reader.remaining(), 10);

    let blocks = reader.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(blocks.len(), 10);

    let group_starts = blocks
        .iter()
        .filter(|b| matches!(b, Block::GroupStart(_)))
        .count();
    assert_eq!(group_starts, 1);
    assert!(matches!(blocks.last(), Some(Block::GroupEnd)));

    Ok(())
}

#[test]
fn read_every_truncation() -> Result<(), Error> {
    let data = std::fs::read(sample_path())?;

    for len in 0..data.len() {
        let result = decode(&data[..len], GroupMode::Nested);
        assert!(
            matches!(result, Err(Error::IOError(_))),
            "truncated at {len}: {result:?}"
        );
    }

    Ok(())
}
