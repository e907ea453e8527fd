mod fake_image_client;

pub use fake_image_client::FakeImageClient;
