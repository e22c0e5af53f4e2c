//! Generation handlers.

mod generate_image;

pub use generate_image::{
    GenerateImageCommand, GenerateImageError, GenerateImageHandler, GenerateImageResult,
};
