use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use stegosaurus_core::media::image::LsbCodec;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut image_with_secret: RgbaImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]));
        let secret = vec![0x5A; 4096];
        LsbCodec::hide(&mut image_with_secret, &secret, false)
            .expect("Cannot hide secret for decoding");

        b.iter(|| {
            LsbCodec::unveil(&image_with_secret).expect("Cannot unveil 4096 bytes");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
