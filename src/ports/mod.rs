mod image_client;

pub use image_client::{ImageClient, ImageRequest};
