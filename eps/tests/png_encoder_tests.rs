use flo_eps::*;
use flo_eps::bitmap::*;
use flo_eps::encoder::*;

use flate2::read::{ZlibDecoder};

use std::io::{self, Read};
use std::cell::{RefCell};
use std::rc::{Rc};

///
/// A chunk read back from a PNG file
///
#[derive(Debug)]
struct RawChunk {
    chunk_type: [u8; 4],
    data:       Vec<u8>,
    crc:        u32,
}

///
/// Splits a PNG file into its chunks (the signature is skipped)
///
fn read_chunks(png_data: &[u8]) -> Vec<RawChunk> {
    let mut chunks  = vec![];
    let mut pos     = 8;

    while pos < png_data.len() {
        let length      = u32::from_be_bytes([png_data[pos], png_data[pos+1], png_data[pos+2], png_data[pos+3]]) as usize;
        let chunk_type  = [png_data[pos+4], png_data[pos+5], png_data[pos+6], png_data[pos+7]];
        let data        = png_data[(pos+8)..(pos+8+length)].to_vec();
        let crc_pos     = pos + 8 + length;
        let crc         = u32::from_be_bytes([png_data[crc_pos], png_data[crc_pos+1], png_data[crc_pos+2], png_data[crc_pos+3]]);

        chunks.push(RawChunk { chunk_type, data, crc });
        pos = crc_pos + 4;
    }

    chunks
}

///
/// Decompresses the image data from a PNG file
///
fn inflate_image_data(png_data: &[u8]) -> Vec<u8> {
    let chunks = read_chunks(png_data);
    let idat    = chunks.iter().find(|chunk| &chunk.chunk_type == b"IDAT").unwrap();

    let mut scanlines = vec![];
    ZlibDecoder::new(&idat.data[..]).read_to_end(&mut scanlines).unwrap();

    scanlines
}

///
/// Decodes a PNG file using the png crate, returning the bitmap it contains
///
fn decode(png_data: &[u8]) -> GrayBitmap {
    let decoder     = png::Decoder::new(png_data);
    let mut reader  = decoder.read_info().unwrap();
    let mut buf     = vec![0; reader.output_buffer_size()];
    let info        = reader.next_frame(&mut buf).unwrap();

    assert!(info.color_type == png::ColorType::Grayscale, "Color type is {:?}", info.color_type);
    assert!(info.bit_depth == png::BitDepth::Eight, "Bit depth is {:?}", info.bit_depth);

    buf.truncate(info.buffer_size());
    GrayBitmap::from_samples(info.width as usize, info.height as usize, buf).unwrap()
}

///
/// A bitmap with a bit of everything in it
///
fn test_bitmap() -> GrayBitmap {
    let mut bitmap = GrayBitmap::new(40, 30);

    bitmap.fill_polygon(&[(5.0, 5.0), (30.0, 8.0), (18.0, 25.0)], 96);
    bitmap.draw_circle(20, 15, 12, BLACK);
    bitmap.draw_line(0, 29, 39, 0, 200);

    bitmap
}

#[test]
fn starts_with_signature() {
    for compress in [true, false].iter() {
        let png_data = encode_png(&test_bitmap(), *compress).unwrap();

        assert!(png_data[0..8] == [137, 80, 78, 71, 13, 10, 26, 10]);
        assert!(png_data[0..8] == PNG_SIGNATURE);
    }
}

#[test]
fn chunks_are_in_order() {
    let png_data    = encode_png(&test_bitmap(), true).unwrap();
    let chunks      = read_chunks(&png_data);
    let types       = chunks.iter().map(|chunk| &chunk.chunk_type).collect::<Vec<_>>();

    assert!(types == vec![b"IHDR", b"IDAT", b"IEND"], "Unexpected chunks: {:?}", chunks);
    assert!(chunks[2].data.is_empty());
}

#[test]
fn header_describes_8_bit_grayscale() {
    let png_data    = encode_png(&GrayBitmap::new(300, 2), true).unwrap();
    let chunks      = read_chunks(&png_data);

    assert!(chunks[0].data == vec![0, 0, 1, 44, 0, 0, 0, 2, 8, 0, 0, 0, 0], "Unexpected header: {:?}", chunks[0].data);
}

#[test]
fn every_chunk_has_valid_crc() {
    for compress in [true, false].iter() {
        let png_data = encode_png(&test_bitmap(), *compress).unwrap();

        for chunk in read_chunks(&png_data) {
            let mut checked = chunk.chunk_type.to_vec();
            checked.extend(chunk.data.iter());

            assert!(crc32(&checked) == chunk.crc, "Bad CRC for chunk {:?}", chunk);
        }
    }
}

#[test]
fn iend_is_standard() {
    let png_data = encode_png(&GrayBitmap::new(1, 1), false).unwrap();

    assert!(png_data[(png_data.len()-12)..] == [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
}

#[test]
fn scanlines_are_unfiltered() {
    let bitmap      = test_bitmap();
    let scanlines   = inflate_image_data(&encode_png(&bitmap, true).unwrap());

    assert!(scanlines.len() == (bitmap.width() + 1) * bitmap.height());

    for (row_data, row) in scanlines.chunks(bitmap.width() + 1).zip(bitmap.rows()) {
        assert!(row_data[0] == 0, "Filter type should be 0");
        assert!(&row_data[1..] == row);
    }
}

#[test]
fn compression_settings_store_the_same_scanlines() {
    let bitmap = test_bitmap();

    assert!(inflate_image_data(&encode_png(&bitmap, true).unwrap()) == inflate_image_data(&encode_png(&bitmap, false).unwrap()));
}

#[test]
fn uncompressed_image_data_is_stored() {
    let bitmap      = test_bitmap();
    let png_data    = encode_png(&bitmap, false).unwrap();
    let idat        = read_chunks(&png_data).into_iter().find(|chunk| &chunk.chunk_type == b"IDAT").unwrap();

    assert!(idat.data.len() > (bitmap.width() + 1) * bitmap.height(), "Stored data should be larger than the raw scanlines");
}

#[test]
fn best_compression_is_smaller() {
    let bitmap          = test_bitmap();
    let compressed      = read_chunks(&encode_png(&bitmap, true).unwrap()).remove(1);
    let uncompressed    = read_chunks(&encode_png(&bitmap, false).unwrap()).remove(1);

    assert!(compressed.data.len() <= uncompressed.data.len(), "Compressed: {}, uncompressed: {}", compressed.data.len(), uncompressed.data.len());
    assert!(compressed.data.len() < (bitmap.width() + 1) * bitmap.height());
}

#[test]
fn decodes_with_png_crate() {
    for compress in [true, false].iter() {
        let bitmap  = test_bitmap();
        let decoded = decode(&encode_png(&bitmap, *compress).unwrap());

        assert!(decoded == bitmap, "Decoded image differs (compress = {})", compress);
    }
}

#[test]
fn reencoding_is_stable() {
    for compress in [true, false].iter() {
        let first   = encode_png(&test_bitmap(), *compress).unwrap();
        let second  = encode_png(&decode(&first), *compress).unwrap();

        assert!(first == second, "Re-encoding changed the file (compress = {})", compress);
    }
}

#[test]
fn intermediate_compression_level() {
    let bitmap      = test_bitmap();
    let encoder     = PngEncoder::new(PngEncoderOptions { compression: CompressionLevel::new(5) });
    let png_data    = encoder.encode(&bitmap).unwrap();

    assert!(decode(&png_data) == bitmap);
}

#[test]
fn compression_levels() {
    assert!(CompressionLevel::new(12) == CompressionLevel::BEST);
    assert!(CompressionLevel::new(0) == CompressionLevel::NONE);
    assert!(CompressionLevel::from(true) == CompressionLevel::BEST);
    assert!(CompressionLevel::from(false) == CompressionLevel::NONE);
    assert!(CompressionLevel::default() == CompressionLevel::BEST);
    assert!(PngEncoderOptions::default().compression == CompressionLevel::BEST);
}

///
/// Compressor that records the levels it was asked for and stores the data without compressing it
///
struct RecordingCompressor {
    levels: Rc<RefCell<Vec<CompressionLevel>>>,
}

impl Compressor for RecordingCompressor {
    fn compress(&self, data: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
        self.levels.borrow_mut().push(level);
        ZlibCompressor.compress(data, CompressionLevel::NONE)
    }
}

///
/// Compressor that always fails
///
struct FailingCompressor;

impl Compressor for FailingCompressor {
    fn compress(&self, _data: &[u8], _level: CompressionLevel) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::Other, "no compression today"))
    }
}

#[test]
fn custom_compressor() {
    let levels      = Rc::new(RefCell::new(vec![]));
    let compressor  = RecordingCompressor { levels: Rc::clone(&levels) };
    let encoder     = PngEncoder::with_compressor(PngEncoderOptions { compression: CompressionLevel::new(3) }, compressor);
    let bitmap      = test_bitmap();
    let png_data    = encoder.encode(&bitmap).unwrap();

    assert!(decode(&png_data) == bitmap);
    assert!(encoder.options().compression == CompressionLevel::new(3));
    assert!(*levels.borrow() == vec![CompressionLevel::new(3)], "Compressor was called with {:?}", levels.borrow());
}

#[test]
fn failed_compression_writes_nothing() {
    let encoder     = PngEncoder::with_compressor(PngEncoderOptions::default(), FailingCompressor);
    let mut target  = vec![];
    let result      = encoder.write_to(&test_bitmap(), &mut target);

    assert!(matches!(result, Err(EncodeError::Compression(_))), "Unexpected result {:?}", result);
    assert!(target.is_empty(), "Nothing should be written when compression fails");
}
