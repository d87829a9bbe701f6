use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use stegosaurus_core::media::image::LsbCodec;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image: RgbaImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]));
        let secret_message = b"Hello World!";

        b.iter(|| {
            LsbCodec::hide(&mut plain_image, &secret_message[..], true)
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
