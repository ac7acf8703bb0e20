//! Built-in dataset format detectors.

mod ade20k2017;
mod ade20k2020;
mod cityscapes;
mod coco;
mod image_dir;
mod lfw;
mod mot_seq;
mod yolo;

pub use ade20k2017::Ade20k2017Detector;
pub use ade20k2020::Ade20k2020Detector;
pub use cityscapes::CityscapesDetector;
pub use coco::CocoDetector;
pub use image_dir::ImageDirDetector;
pub use lfw::LfwDetector;
pub use mot_seq::MotSeqDetector;
pub use yolo::YoloDetector;

use crate::detection::FormatDetector;

/// Returns all built-in detectors.
pub fn all_detectors() -> Vec<Box<dyn FormatDetector>> {
    vec![
        Box::new(Ade20k2017Detector),
        Box::new(Ade20k2020Detector),
        Box::new(CityscapesDetector),
        Box::new(CocoDetector),
        Box::new(ImageDirDetector),
        Box::new(LfwDetector),
        Box::new(MotSeqDetector),
        Box::new(YoloDetector),
    ]
}
