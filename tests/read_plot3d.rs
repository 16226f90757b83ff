mod common;

use plot3d_vtk::parse::{AsciiErrorKind, BinaryError};
use plot3d_vtk::{
    ConfigError, Endian, Error, FileFormat, FloatPrecision, MeshBlock2D, MeshBlock3D,
    ParseError, Plot3DReader, ReaderConfig,
};
use proptest::prelude::*;

fn ascii(dimensions: usize, single_block: bool) -> ReaderConfig {
    ReaderConfig {
        dimensions,
        format: FileFormat::Ascii,
        single_block,
        ..Default::default()
    }
}

fn binary(dimensions: usize, single_block: bool) -> ReaderConfig {
    ReaderConfig {
        dimensions,
        format: FileFormat::Binary,
        single_block,
        ..Default::default()
    }
}

fn read_3d(config: ReaderConfig, input: &[u8]) -> Result<Vec<MeshBlock3D>, Error> {
    let mut blocks = Vec::new();
    let mut reader = Plot3DReader::new(config);
    reader.add_3d_consumer(|block: MeshBlock3D| {
        blocks.push(block);
        true
    });
    reader.parse(input)?;
    drop(reader);
    Ok(blocks)
}

fn read_2d(config: ReaderConfig, input: &[u8]) -> Result<Vec<MeshBlock2D>, Error> {
    let mut blocks = Vec::new();
    let mut reader = Plot3DReader::new(config);
    reader.add_2d_consumer(|block: MeshBlock2D| {
        blocks.push(block);
        true
    });
    reader.parse(input)?;
    drop(reader);
    Ok(blocks)
}

#[test]
fn single_block_2d_ascii() {
    common::init_logging();

    let input = "2 2\n0\n1\n0\n1\n0\n0\n1\n1\n";
    let blocks = read_2d(ascii(2, true), input.as_bytes()).unwrap();

    assert_eq!(blocks.len(), 1);
    let block = &blocks[0];
    assert_eq!(block.extent(), [2, 2]);
    assert_eq!(block.coord([0, 0]), [0.0, 0.0]);
    assert_eq!(block.coord([1, 0]), [1.0, 0.0]);
    assert_eq!(block.coord([0, 1]), [0.0, 1.0]);
    assert_eq!(block.coord([1, 1]), [1.0, 1.0]);
}

#[test]
fn multi_block_3d_ascii() {
    let expected = vec![
        common::numbered_block([2, 3, 2], 0.5),
        common::numbered_block([1, 2, 4], -3.0),
    ];
    let input = common::ascii_file(&expected, 3, false);

    let blocks = read_3d(ascii(3, false), input.as_bytes()).unwrap();
    assert_eq!(blocks, expected);
}

#[test]
fn multi_block_3d_binary() {
    let expected = vec![
        common::numbered_block([3, 2, 2], 1.0),
        common::numbered_block([2, 2, 1], 7.0),
    ];
    let input = common::binary_file_le(&expected, 3, false);

    let blocks = read_3d(binary(3, false), &input).unwrap();
    assert_eq!(blocks, expected);
}

#[test]
fn big_endian_binary() {
    let expected = vec![common::numbered_block([2, 2, 2], 0.0)];
    let input = common::binary_file_be(&expected, 3, true);

    let config = ReaderConfig {
        endian: Endian::Big,
        ..binary(3, true)
    };
    let blocks = read_3d(config, &input).unwrap();
    assert_eq!(blocks, expected);
}

#[test]
fn single_precision_binary() {
    let mut input = Vec::new();
    common::record::<byteorder::LittleEndian>(&mut input, &[2i32.to_le_bytes(), 1i32.to_le_bytes()].concat());

    let mut payload = Vec::new();
    for value in [0.5f32, 1.5, -1.0, 2.0] {
        payload.extend_from_slice(&value.to_le_bytes());
    }
    common::record::<byteorder::LittleEndian>(&mut input, &payload);

    let config = ReaderConfig {
        precision: FloatPrecision::F32,
        ..binary(2, true)
    };
    let blocks = read_2d(config, &input).unwrap();

    assert_eq!(blocks[0].coord([0, 0]), [0.5, -1.0]);
    assert_eq!(blocks[0].coord([1, 0]), [1.5, 2.0]);
}

#[test]
fn binary_2d_is_projected() {
    let source = vec![common::numbered_block([3, 2, 1], 2.0)];
    let input = common::binary_file_le(&source, 2, false);

    let blocks = read_2d(binary(2, false), &input).unwrap();
    assert_eq!(blocks, vec![source[0].to_2d()]);
}

#[test]
fn zero_block_count_is_rejected() {
    let mut calls = 0;

    let mut reader = Plot3DReader::new(ascii(3, false));
    reader.add_3d_consumer(|_: MeshBlock3D| {
        calls += 1;
        true
    });
    let err = reader.parse("0\n1 1 1\n0\n0\n0\n".as_bytes()).unwrap_err();
    drop(reader);

    assert_eq!(calls, 0);
    match err {
        Error::Parse(ParseError::Ascii(err)) => {
            assert_eq!(err.line(), 1);
            assert!(matches!(err.kind(), AsciiErrorKind::BlockCount(0)));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn negative_block_count_is_rejected() {
    let err = read_3d(ascii(3, false), "-2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Ascii(_))));

    let mut input = Vec::new();
    common::record::<byteorder::LittleEndian>(&mut input, &(-2i32).to_le_bytes());
    let err = read_3d(binary(3, false), &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::Binary(BinaryError::BlockCount(-2)))
    ));
}

#[test]
fn non_numeric_block_count_is_zero() {
    let err = read_3d(ascii(3, false), "blocks: 2\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("block count must be at least 1, got 0"));
}

#[test]
fn mismatched_record_is_rejected() {
    let mut input = common::binary_file_le(&[common::numbered_block([2, 1, 1], 0.0)], 3, true);
    let last = input.len() - 4;
    input[last..].copy_from_slice(&40u32.to_le_bytes());

    let err = read_3d(binary(3, true), &input).unwrap_err();
    match err {
        Error::Parse(ParseError::Binary(BinaryError::RecordMismatch(mismatch))) => {
            assert_eq!(mismatch.open, 48);
            assert_eq!(mismatch.close, 40);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn short_binary_file_is_rejected() {
    let mut input = common::binary_file_le(&[common::numbered_block([2, 2, 2], 0.0)], 3, false);
    input.truncate(input.len() - 12);

    let err = read_3d(binary(3, false), &input).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Binary(BinaryError::Io(_)))));
}

#[test]
fn oversized_binary_extents_are_rejected() {
    let mut input = Vec::new();
    let mut extents = Vec::new();
    for _ in 0..3 {
        extents.extend_from_slice(&(1i32 << 30).to_le_bytes());
    }
    common::record::<byteorder::LittleEndian>(&mut input, &extents);

    let err = read_3d(binary(3, true), &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::Binary(BinaryError::ExtentTooLarge([
            1073741824, 1073741824, 1073741824
        ])))
    ));
}

#[test]
fn coordinate_record_shorter_than_extents() {
    let mut input = Vec::new();
    let mut extents = Vec::new();
    for _ in 0..3 {
        extents.extend_from_slice(&50000i32.to_le_bytes());
    }
    common::record::<byteorder::LittleEndian>(&mut input, &extents);
    common::record::<byteorder::LittleEndian>(&mut input, &[0u8; 24]);

    let err = read_3d(binary(3, true), &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::Binary(BinaryError::CoordinateRecord { found: 24, .. }))
    ));
}

#[test]
fn oversized_ascii_extents_are_rejected() {
    let err = read_3d(ascii(3, true), "99999999999 99999999999 9\n0\n".as_bytes()).unwrap_err();

    match err {
        Error::Parse(ParseError::Ascii(err)) => {
            assert_eq!(err.line(), 1);
            assert!(matches!(err.kind(), AsciiErrorKind::ExtentTooLarge(_)));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn ascii_blocks_may_end_mid_line() {
    let blocks = read_2d(ascii(2, false), "2\n1 1\n1 1\n1 2 3\n4\n".as_bytes()).unwrap();

    let coords: Vec<[f64; 2]> = blocks.iter().map(|block| block.coord([0, 0])).collect();
    assert_eq!(coords, vec![[1.0, 2.0], [3.0, 4.0]]);
}

#[test]
fn missing_extents_report_the_line() {
    let err = read_3d(ascii(3, false), "2\n2 2 2\n2 2\n".as_bytes()).unwrap_err();

    match err {
        Error::Parse(err) => {
            assert_eq!(err.line(), Some(3));
            assert!(err.to_string().contains("line 3"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn bad_coordinate_reports_the_line() {
    let err = read_2d(ascii(2, true), "1 2\n0.0\nx\n".as_bytes()).unwrap_err();

    match err {
        Error::Parse(ParseError::Ascii(err)) => {
            assert_eq!(err.line(), 3);
            assert!(matches!(err.kind(), AsciiErrorKind::BadFloat(token) if token == "x"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn invalid_dimensions_are_a_config_error() {
    let err = read_3d(ascii(1, true), "2\n0\n1\n".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidDimensions(1))
    ));
}

#[test]
fn blocks_before_a_failure_are_kept() {
    let source = vec![
        common::numbered_block([2, 2, 1], 0.0),
        common::numbered_block([2, 2, 1], 5.0),
    ];
    let mut input = common::binary_file_le(&source, 3, false);
    input.truncate(input.len() - 20);

    let mut blocks = Vec::new();
    let mut reader = Plot3DReader::new(binary(3, false));
    reader.add_3d_consumer(|block: MeshBlock3D| {
        blocks.push(block);
        true
    });
    assert!(reader.parse(input.as_slice()).is_err());
    drop(reader);

    assert_eq!(blocks, vec![source[0].clone()]);
}

#[test]
fn stopping_consumer_skips_the_rest_for_one_block() {
    common::init_logging();

    let source = vec![
        common::numbered_block([2, 2, 1], 0.0),
        common::numbered_block([3, 2, 1], 0.0),
        common::numbered_block([4, 2, 1], 0.0),
    ];
    let input = common::ascii_file(&source, 2, false);

    let mut first_seen = Vec::new();
    let mut second_seen = Vec::new();

    let mut reader = Plot3DReader::new(ascii(2, false));
    reader.add_2d_consumer(|block: MeshBlock2D| {
        first_seen.push(block.extent());
        // refuse only the first block
        first_seen.len() > 1
    });
    reader.add_2d_consumer(|block: MeshBlock2D| {
        second_seen.push(block.extent());
        true
    });
    let count = reader.parse(input.as_bytes()).unwrap();
    drop(reader);

    assert_eq!(count, 3);
    assert_eq!(first_seen, vec![[2, 2], [3, 2], [4, 2]]);
    assert_eq!(second_seen, vec![[3, 2], [4, 2]]);
}

#[test]
fn consumers_for_the_other_dimension_are_not_called() {
    let source = vec![common::numbered_block([2, 2, 2], 0.0)];
    let input = common::ascii_file(&source, 3, true);

    let mut calls_2d = 0;
    let mut calls_3d = 0;

    let mut reader = Plot3DReader::new(ascii(3, true));
    reader.add_2d_consumer(|_: MeshBlock2D| {
        calls_2d += 1;
        true
    });
    reader.add_3d_consumer(|_: MeshBlock3D| {
        calls_3d += 1;
        true
    });
    reader.parse(input.as_bytes()).unwrap();
    drop(reader);

    assert_eq!((calls_2d, calls_3d), (0, 1));
}

fn arb_blocks(dims: usize) -> impl Strategy<Value = Vec<MeshBlock3D>> {
    let extent = if dims == 2 {
        (1usize..4, 1usize..4, Just(1usize)).boxed()
    } else {
        (1usize..4, 1usize..4, 1usize..4).boxed()
    };

    prop::collection::vec(
        extent.prop_flat_map(|(ni, nj, nk)| {
            prop::collection::vec(prop::array::uniform3(-1.0e6f64..1.0e6), ni * nj * nk)
                .prop_map(move |coords| {
                    let mut block = MeshBlock3D::new([ni, nj, nk]);
                    let mut coords = coords.into_iter();
                    for k in 0..nk {
                        for j in 0..nj {
                            for i in 0..ni {
                                if let Some(coord) = coords.next() {
                                    block.set_coord([i, j, k], coord);
                                }
                            }
                        }
                    }
                    block
                })
        }),
        1..4,
    )
}

proptest! {
    #[test]
    fn ascii_and_binary_agree_3d(blocks in arb_blocks(3), single in any::<bool>()) {
        let blocks = if single { blocks[..1].to_vec() } else { blocks };

        let from_ascii = read_3d(ascii(3, single), common::ascii_file(&blocks, 3, single).as_bytes()).unwrap();
        let from_binary = read_3d(binary(3, single), &common::binary_file_le(&blocks, 3, single)).unwrap();

        prop_assert_eq!(&from_ascii, &from_binary);
        prop_assert_eq!(&from_binary, &blocks);
    }

    #[test]
    fn ascii_and_binary_agree_2d(blocks in arb_blocks(2)) {
        let from_ascii = read_2d(ascii(2, false), common::ascii_file(&blocks, 2, false).as_bytes()).unwrap();
        let from_binary = read_2d(binary(2, false), &common::binary_file_le(&blocks, 2, false)).unwrap();

        let expected: Vec<MeshBlock2D> = blocks.iter().map(MeshBlock3D::to_2d).collect();

        prop_assert_eq!(&from_ascii, &from_binary);
        prop_assert_eq!(&from_binary, &expected);
    }
}
