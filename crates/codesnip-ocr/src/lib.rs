mod capture;
mod engine;
mod hotkey;
mod pipeline;
mod preprocess;

pub use capture::{display_context, ScreenGrabber, XcapGrabber};
pub use engine::{TesseractEngine, TextRecognizer};
pub use hotkey::HotkeyManager;
pub use pipeline::Extractor;
pub use preprocess::{binarize, prepare, to_grayscale, upscale_2x};
