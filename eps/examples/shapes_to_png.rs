use flo_eps::*;
use flo_eps::bitmap::*;

use std::fs;

///
/// Draws some shapes directly on a bitmap, then converts an EPS document describing the same scene, writing both to PNG files
///
pub fn main() {
    // Drawing on a bitmap directly uses device coordinates (y increases downwards)
    let mut bitmap = GrayBitmap::new(200, 150);

    bitmap.fill_polygon(&[(20.0, 130.0), (120.0, 130.0), (70.0, 40.0)], 128);
    bitmap.draw_circle(160, 50, 30, BLACK);
    bitmap.draw_arc(160.0, 50.0, 20.0, 0.0, 180.0, 64);

    let png_data = encode_png(&bitmap, true).unwrap();
    fs::write("shapes_direct.png", &png_data).unwrap();

    // The same scene as an EPS document (user space has y increasing upwards)
    let source = "%!PS-Adobe-3.0 EPSF-3.0
%%BoundingBox: 0 0 200 150
newpath 20 20 moveto 120 20 lineto 70 110 lineto closepath 0.5 setgray fill
newpath 160 100 30 0 360 arc 0 setgray stroke
newpath 160 100 20 180 360 arc 0.25 setgray stroke
showpage
";

    let image = convert_source(source, ConversionOptions::default()).unwrap();
    fs::write("shapes_eps.png", &image.png_data).unwrap();

    println!("Wrote shapes_direct.png ({} bytes) and shapes_eps.png ({} bytes)", png_data.len(), image.png_data.len());
}
