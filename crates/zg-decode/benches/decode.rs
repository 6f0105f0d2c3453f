use criterion::{Criterion, black_box, criterion_group, criterion_main};
use zg_core::charset::GlyphTable;
use zg_core::config::DecodeOptions;
use zg_core::frame::PixelBuffer;

fn bench_decode(c: &mut Criterion) {
    let table = GlyphTable::zx81();
    let opts = DecodeOptions::default();
    let mut frame = PixelBuffer::new(320, 240);
    for y in 0..240 {
        for x in 0..320 {
            frame.set_rgb(x, y, 205, 205, 205);
        }
    }

    c.bench_function("decode_frame", |b| {
        b.iter(|| zg_decode::decode(black_box(&frame), &opts, &table));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
