#[macro_use]
extern crate criterion;
extern crate librat;

use criterion::Criterion;
use librat::Rational;

macro_rules! bench_rational_add {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = Rational::new(
                String::from_utf8(vec![b'9'; $size]).unwrap(),
                String::from_utf8(vec![b'8'; $size]).unwrap(),
            )
            .unwrap();
            let v = Rational::new(
                String::from_utf8(vec![b'5'; $size]).unwrap(),
                String::from_utf8(vec![b'3'; $size]).unwrap(),
            )
            .unwrap();
            c.bench_function(concat!("Rational_", $size, "_add"), |b| {
                b.iter(|| u.add(&v).unwrap())
            });
            c.bench_function(concat!("Rational_", $size, "_sub"), |b| {
                b.iter(|| u.sub(&v).unwrap())
            });
        }
    )*
    }
}

bench_rational_add! {
    size_256: 256
    size_1024: 1024
    size_2048: 2048
}

criterion_group!(rational_add_benches, size_256, size_1024, size_2048);
criterion_main!(rational_add_benches);
