/// Network module
///
/// This module talks to the remote analysis service:
/// - Multipart upload and response decoding (client.rs)
/// - Resolution of the annotated image the response points at

pub mod client;
