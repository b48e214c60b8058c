use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_layout::layout::{classify_lines, group_glyphs_into_lines, Glyph};

// Synthetic page: `line_count` lines of prose with a bullet every fifth line
fn generate_page(line_count: usize) -> Vec<Glyph> {
    let mut glyphs = Vec::new();

    for line in 0..line_count {
        let top = 40.0 + line as f32 * 14.0;
        let text = if line % 5 == 0 {
            "• A bulleted point with a few words"
        } else {
            "Body text that runs across most of the page width."
        };

        for (i, c) in text.chars().enumerate() {
            let x0 = 40.0 + i as f32 * 6.0;
            // jitter the baseline a little like real extraction output
            let jitter = (i % 3) as f32 * 0.4;
            glyphs.push(Glyph::new(c.to_string(), x0, x0 + 6.0, top + jitter, 12.0));
        }
    }

    glyphs.reverse();
    glyphs
}

fn benchmark_line_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_grouping");

    for lines in [10, 50, 200].iter() {
        let glyphs = generate_page(*lines);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_lines", lines)),
            &glyphs,
            |b, g| {
                b.iter(|| black_box(group_glyphs_into_lines(black_box(g))));
            },
        );
    }

    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for lines in [10, 50, 200].iter() {
        let text_lines = group_glyphs_into_lines(&generate_page(*lines));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_lines", lines)),
            &text_lines,
            |b, l| {
                b.iter(|| black_box(classify_lines(black_box(l), 600.0)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_line_grouping, benchmark_classification);
criterion_main!(benches);
