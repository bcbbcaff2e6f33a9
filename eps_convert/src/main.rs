use flo_eps::*;

use clap::{Parser};
use log::*;

use std::path::{PathBuf};
use std::process::{ExitCode};

///
/// Converts an EPS file to a grayscale PNG file
///
#[derive(Parser, Debug)]
#[command(name = "eps_to_png", version, about = "Convert EPS files to PNG")]
struct Opt {
    /// The EPS file to convert
    input: PathBuf,

    /// Where to write the PNG file
    output: PathBuf,

    /// Disable compression (produces larger files)
    #[arg(long = "no-compress")]
    no_compress: bool,

    /// Compression level to use, from 0 (none) to 9 (best); overrides --no-compress
    #[arg(long = "level", value_parser = clap::value_parser!(u8).range(0..=9))]
    level: Option<u8>,

    /// Refuse to render images with more pixels than this
    #[arg(long = "max-pixels", default_value_t = DEFAULT_MAX_PIXELS)]
    max_pixels: usize,
}

impl Opt {
    ///
    /// The conversion options requested on the command line
    ///
    fn conversion_options(&self) -> ConversionOptions {
        let compression = match self.level {
            Some(level) => CompressionLevel::new(level),
            None        => CompressionLevel::from(!self.no_compress),
        };

        ConversionOptions {
            encoder:    PngEncoderOptions { compression },
            max_pixels: self.max_pixels,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let opt     = Opt::parse();
    let options = opt.conversion_options();

    info!("Converting {} to {} ({:?})", opt.input.display(), opt.output.display(), options.encoder.compression);

    match convert_file(&opt.input, &opt.output, options) {
        Ok(image) => {
            println!("Converted {} to {}", opt.input.display(), opt.output.display());
            println!("Dimensions: {}x{} pixels", image.width(), image.height());
            println!("Bounding box: {}", image.bounding_box);

            ExitCode::SUCCESS
        }

        Err(err) => {
            error!("Conversion of {} failed: {:?}", opt.input.display(), err);
            eprintln!("eps_to_png: {}", err);

            ExitCode::FAILURE
        }
    }
}
