use criterion::{black_box, criterion_group, criterion_main, Criterion};
use globe::geo::{great_circle_distance, great_circle_interpolate, GeoPoint};
use globe::Globe;

const BRISTOL: GeoPoint = GeoPoint::new(51.453349, -2.588323);
const SYDNEY: GeoPoint = GeoPoint::new(-33.8688, 151.2093);

fn bench_geometry(c: &mut Criterion) {
    c.bench_function("great_circle_distance", |b| {
        b.iter(|| great_circle_distance(black_box(BRISTOL), black_box(SYDNEY)))
    });
    c.bench_function("great_circle_interpolate", |b| {
        b.iter(|| great_circle_interpolate(black_box(BRISTOL), black_box(SYDNEY), black_box(0.37)))
    });
}

fn bench_drawing(c: &mut Criterion) {
    c.bench_function("draw_graticule_10", |b| {
        b.iter(|| {
            let mut g = Globe::new();
            g.draw_graticule(black_box(10.0), &[]);
            g
        })
    });
    c.bench_function("draw_line_long", |b| {
        b.iter(|| {
            let mut g = Globe::new();
            g.draw_line(BRISTOL.lat, BRISTOL.lng, SYDNEY.lat, SYDNEY.lng, &[]);
            g
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut g = Globe::new();
    g.draw_graticule(10.0, &[]);
    g.draw_land_boundaries(&[]);
    g.draw_country_boundaries(&[]);
    g.center_on(BRISTOL.lat, BRISTOL.lng);

    c.bench_function("render_image_400", |b| b.iter(|| g.render_image(black_box(400))));
    c.bench_function("render_preview_80x24", |b| b.iter(|| g.render_preview(80, 24)));
}

criterion_group!(benches, bench_geometry, bench_drawing, bench_render);
criterion_main!(benches);
