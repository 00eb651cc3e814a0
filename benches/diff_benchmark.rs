//! Diffing engine benchmark: Measure frame diff performance.
//!
//! Target: < 500µs for a 200×100 pixel frame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use halfblock::buffer::diff::{render_diff, render_full};
use halfblock::{Frame, OutputBuffer, Rgb};

/// Create a frame with varied content for benchmarking.
fn create_test_frame(width: u32, height: u32, seed: u32) -> Frame {
    let mut frame = Frame::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            frame.set_pixel(
                x,
                y,
                Rgb::new(
                    ((x * 3 + seed) % 256) as u8,
                    ((y * 7 + seed) % 256) as u8,
                    ((x + y + seed) % 256) as u8,
                ),
            );
        }
    }
    frame
}

fn diff_identical_frames(c: &mut Criterion) {
    let frame = create_test_frame(200, 100, 0);
    let frame_clone = frame.clone();

    c.bench_function("diff_200x100_identical", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(4096);
            render_diff(black_box(&frame_clone), black_box(&frame), &mut output)
        })
    });
}

fn diff_single_pixel_change(c: &mut Criterion) {
    let frame_a = create_test_frame(200, 100, 0);
    let mut frame_b = frame_a.clone();
    // Change a single pixel in the middle
    frame_b.set_pixel(100, 50, Rgb::new(255, 0, 0));

    c.bench_function("diff_200x100_single_change", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(4096);
            render_diff(black_box(&frame_b), black_box(&frame_a), &mut output)
        })
    });
}

fn diff_many_changes(c: &mut Criterion) {
    let frame_a = create_test_frame(200, 100, 0);
    let frame_b = create_test_frame(200, 100, 1); // Different seed = different content

    c.bench_function("diff_200x100_full_change", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(65536);
            render_diff(black_box(&frame_b), black_box(&frame_a), &mut output)
        })
    });
}

fn diff_solid_runs(c: &mut Criterion) {
    // Solid fills hit the color-run suppression on every cell
    let mut frame_a = Frame::new(200, 100).unwrap();
    frame_a.fill(Rgb::new(20, 20, 30));
    let mut frame_b = frame_a.clone();
    frame_b.fill(Rgb::new(200, 40, 40));

    c.bench_function("diff_200x100_solid_change", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(65536);
            render_diff(black_box(&frame_b), black_box(&frame_a), &mut output)
        })
    });
}

fn full_render(c: &mut Criterion) {
    let frame = create_test_frame(200, 100, 0);

    c.bench_function("render_full_200x100", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(65536);
            render_full(black_box(&frame), &mut output)
        })
    });
}

fn diff_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");

    for (width, height) in [(80, 48), (120, 80), (200, 100), (300, 160)] {
        let frame_a = create_test_frame(width, height, 0);
        let frame_b = create_test_frame(width, height, 1);

        group.bench_with_input(
            BenchmarkId::new("full_change", format!("{width}x{height}")),
            &(frame_a, frame_b),
            |b, (a, bb)| {
                b.iter(|| {
                    let mut output = OutputBuffer::with_capacity(65536);
                    render_diff(black_box(bb), black_box(a), &mut output)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    diff_identical_frames,
    diff_single_pixel_change,
    diff_many_changes,
    diff_solid_runs,
    full_render,
    diff_various_sizes,
);
criterion_main!(benches);
