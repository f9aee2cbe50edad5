use criterion::{criterion_group, criterion_main, Criterion};
use gpu_block_decode::{decode_astc_block, decode_bc7_block, AstcFootprint};
use std::hint::black_box;

/// Builds `count` 16 byte blocks. Every block has a non-zero first byte so
/// BC7 always takes a real mode, and a varying payload.
fn make_blocks(count: usize) -> Vec<[u8; 16]> {
    (0..count)
        .map(|block_idx| {
            let mut block = [0u8; 16];
            block[0] = 1 << (block_idx % 8);
            for (i, byte) in block.iter_mut().enumerate().skip(1) {
                *byte = ((block_idx * i) % 255) as u8;
            }
            block
        })
        .collect()
}

/// ASTC LDR void-extent block, decodes as a constant color for any footprint.
const ASTC_VOID_EXTENT: [u8; 16] = [
    0xFC, 0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x80, 0x80, 0xFF, 0xFF,
];

fn criterion_benchmark(c: &mut Criterion) {
    const BLOCK_COUNT: usize = 65536; // 1MiB of compressed blocks

    let blocks = make_blocks(BLOCK_COUNT);

    let mut group = c.benchmark_group("BC7 Decode Block (BC7 -> RGBA8888)");
    group.throughput(criterion::Throughput::Bytes((BLOCK_COUNT * 16) as u64));

    let mut output = [0u8; 64];
    group.bench_function("decode_bc7_block", |b| {
        b.iter(|| {
            for block in &blocks {
                decode_bc7_block(black_box(block), &mut output);
            }
        })
    });

    group.bench_function("decode_bc7_block_reserved_mode", |b| {
        let reserved = [0u8; 16];
        b.iter(|| {
            for _ in 0..BLOCK_COUNT {
                decode_bc7_block(black_box(&reserved), &mut output);
            }
        })
    });
    group.finish();

    let mut group = c.benchmark_group("ASTC Decode Block (ASTC -> RGBA8888)");
    group.throughput(criterion::Throughput::Bytes((BLOCK_COUNT * 16) as u64));

    for footprint in [
        AstcFootprint::Astc4x4,
        AstcFootprint::Astc6x6,
        AstcFootprint::Astc12x12,
    ] {
        let (width, height) = footprint.dimensions();
        let mut output = vec![0u8; footprint.output_len()];

        group.bench_function(format!("decode_astc_block_{footprint}"), |b| {
            b.iter(|| {
                for block in &blocks {
                    decode_astc_block(black_box(block), width, height, &mut output);
                }
            })
        });

        group.bench_function(format!("decode_astc_block_{footprint}_void_extent"), |b| {
            b.iter(|| {
                for _ in 0..BLOCK_COUNT {
                    decode_astc_block(black_box(&ASTC_VOID_EXTENT), width, height, &mut output);
                }
            })
        });
    }

    group.bench_function("decode_astc_block_unsupported_footprint", |b| {
        let mut output = [0u8; 7 * 7 * 4];
        b.iter(|| {
            for block in &blocks {
                decode_astc_block(black_box(block), 7, 7, &mut output);
            }
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
