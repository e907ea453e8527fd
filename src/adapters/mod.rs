pub mod image_client_http;

pub use image_client_http::{API_KEY_ENV, HttpImageClient};
