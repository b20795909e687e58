//! Caching something more expensive than an integer: a decoded image.
//! The `size` field on `EntryMeta` records an application-defined cost
//! (here, byte length) even though the cache itself only acts on entry
//! count for eviction, not on this value.

use slidecache_core::Engine;

struct DecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

fn decode_image(path: &str) -> DecodedImage {
    println!("decoding {path} (expensive)");
    DecodedImage {
        width: 256,
        height: 256,
        pixels: vec![0u8; 256 * 256 * 4],
    }
}

fn main() {
    let cache: Engine<String, DecodedImage> = Engine::new();

    let path = "assets/banner.png".to_string();
    let image = cache.get_with(
        path.clone(),
        || decode_image(&path),
        |meta| meta.size = (256 * 256 * 4) as u64,
    );
    println!("{}x{}, {} bytes", image.width, image.height, image.pixels.len());
    drop(image);

    // Second request for the same path reuses the decoded buffer.
    let image_again = cache.get(path, || decode_image("assets/banner.png"));
    println!("cache hit: {} bytes", image_again.pixels.len());
}
