//! Manual pipeline smoke check - run with:
//! cargo run -p codesnip-ocr --bin grab_region -- 0 0 400 200

use anyhow::Result;
use clap::Parser;
use codesnip_config::ocr::OcrConfig;
use codesnip_ocr::{display_context, Extractor, TesseractEngine, XcapGrabber};
use codesnip_types::{Extraction, LogicalPoint, SelectionGesture};

/// Logical corner coordinates of the region to grab.
#[derive(Parser, Debug)]
struct CaptureParameter {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

fn main() -> Result<()> {
    let params = CaptureParameter::parse();

    let version = TesseractEngine::probe()?;
    println!("tesseract: {}", version.trim());

    let display = display_context(None)?;
    println!("scale factor: {}", display.scale_factor());

    let extractor = Extractor::new(
        display,
        XcapGrabber::new(),
        TesseractEngine::from_config(&OcrConfig::new()),
    );

    let gesture = SelectionGesture {
        start: LogicalPoint::new(params.x1, params.y1),
        end: LogicalPoint::new(params.x2, params.y2),
    };

    let start = std::time::Instant::now();
    match extractor.extract(&gesture)? {
        Extraction::Text(text) => {
            println!("recognized in {:?}:", start.elapsed());
            for line in text.lines() {
                println!("> {line}");
            }
        }
        Extraction::NoText => println!("no text detected in selection"),
    }

    Ok(())
}
