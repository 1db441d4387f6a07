#[macro_use]
extern crate criterion;
extern crate librat;

use criterion::Criterion;
use librat::Rational;

macro_rules! bench_rational_constructor {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            c.bench_function(concat!("Rational_", $size, "_constructor"), |b| {
                let numer = String::from_utf8(vec![b'6'; $size]).unwrap();
                let denom = String::from_utf8(vec![b'4'; $size]).unwrap();
                b.iter(|| {
                    Rational::new(numer.as_str(), denom.as_str()).unwrap();
                })
            });
        }
    )*
    }
}

macro_rules! bench_rational_parse {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            c.bench_function(concat!("Rational_", $size, "_parse_decimal"), |b| {
                let text = String::from_utf8(vec![b'9'; $size]).unwrap() + "." + "125";
                b.iter(|| {
                    text.parse::<Rational>().unwrap();
                })
            });
        }
    )*
    }
}

bench_rational_constructor! {
    size_256: 256
    size_1024: 1024
    size_2048: 2048
}

bench_rational_parse! {
    parse_256: 256
    parse_1024: 1024
}

criterion_group!(ctor_benches, size_256, size_1024, size_2048, parse_256, parse_1024);
criterion_main!(ctor_benches);
