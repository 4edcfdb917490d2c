//! Benchmarks for page decoding and thumbnail decoding.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;
use unsplash_tui::thumbnails::{decode_thumbnail, THUMBNAIL_MAX_SIZE};
use unsplash_tui::unsplash::{decode_listing, decode_search};

fn photo(i: usize) -> String {
    format!(
        r##"{{"id":"p{i}","width":4000,"height":3000,"color":"#a0b0c0","likes":{i},
"description":"A description for photo {i}","alt_description":"alt {i}",
"urls":{{"raw":"https://images.test/p{i}/raw","full":"https://images.test/p{i}/full",
"regular":"https://images.test/p{i}/regular","small":"https://images.test/p{i}/small",
"thumb":"https://images.test/p{i}/thumb"}},
"user":{{"name":"Author {i}","username":"author{i}"}}}}"##
    )
}

fn listing_body(count: usize) -> String {
    let photos: Vec<String> = (0..count).map(photo).collect();
    format!("[{}]", photos.join(","))
}

fn search_body(count: usize) -> String {
    format!(
        r#"{{"total":10000,"total_pages":334,"results":{}}}"#,
        listing_body(count)
    )
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn bench_page_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_decode");

    for count in [10, 30] {
        let listing = listing_body(count);
        group.throughput(Throughput::Bytes(listing.len() as u64));
        group.bench_with_input(BenchmarkId::new("listing", count), &listing, |b, body| {
            b.iter(|| black_box(decode_listing(black_box(body.as_bytes()))))
        });

        let search = search_body(count);
        group.bench_with_input(BenchmarkId::new("search", count), &search, |b, body| {
            b.iter(|| black_box(decode_search(black_box(body.as_bytes()))))
        });
    }

    group.finish();
}

fn bench_thumbnail_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_decode");

    for (w, h) in [(200, 150), (400, 300), (1080, 720)] {
        let bytes = png(w, h);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    black_box(decode_thumbnail(
                        black_box(bytes),
                        THUMBNAIL_MAX_SIZE,
                        THUMBNAIL_MAX_SIZE,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_page_decode, bench_thumbnail_decode);
criterion_main!(benches);
