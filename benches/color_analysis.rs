use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flag_colors::color::{blend_palette, ColorAnalyzer};
use flag_colors::render::render_color_bar;
use image::{Rgb, RgbImage};

fn tricolor() -> RgbImage {
    RgbImage::from_fn(320, 213, |x, _| {
        Rgb(match x * 3 / 320 {
            0 => [0, 85, 164],
            1 => [255, 255, 255],
            _ => [239, 65, 53],
        })
    })
}

fn benchmark_color_analysis(c: &mut Criterion) {
    let flag = tricolor();
    let analyzer = ColorAnalyzer::default();

    c.bench_function("analyze_flag_320px", |b| {
        b.iter(|| analyzer.analyze(black_box(&flag)))
    });

    let palette = analyzer.analyze(&flag).expect("benchmark flag clusters");
    c.bench_function("blend_and_render", |b| {
        b.iter(|| {
            let blended = blend_palette(black_box(&palette));
            let bar = render_color_bar(black_box(&palette));
            (blended, bar)
        })
    });
}

criterion_group!(benches, benchmark_color_analysis);
criterion_main!(benches);
