#[macro_use]
extern crate criterion;
extern crate librat;

use criterion::Criterion;
use librat::Rational;

const CASES: [&str; 5] = ["eq", "lte", "lt", "gte", "gt"];

fn compare(u: &Rational, v: &Rational, s: &str) -> bool {
    match s {
        "eq" => u == v,
        "lte" => u <= v,
        "lt" => u < v,
        "gte" => u >= v,
        "gt" => u > v,
        _ => unreachable!(),
    }
}

fn rational_of_size(digit: u8, size: usize) -> Rational {
    let numer = String::from_utf8(vec![digit; size]).unwrap();
    let denom = String::from_utf8(vec![b'7'; size / 2]).unwrap();
    Rational::new(numer.as_str(), denom.as_str()).unwrap()
}

macro_rules! bench_rational_cmp {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u = rational_of_size(b'9', $size);
            let v = rational_of_size(b'5', $size);
            let neg_v = v.neg();
            for item in CASES.iter() {
                c.bench_function(&(concat!("Rational_", $size, "_cmp_").to_string() + (*item)), |b| {
                    b.iter(|| compare(&u, &v, item))
                });
                c.bench_function(&(concat!("Rational_", $size, "_cmp_signs_").to_string() + (*item)), |b| {
                    b.iter(|| compare(&u, &neg_v, item))
                });
            }
        }
    )*
    }
}

bench_rational_cmp! {
    size_1024: 1024
    size_2048: 2048
    size_4096: 4096
}

criterion_group!(rational_cmp_benches, size_1024, size_2048, size_4096);
criterion_main!(rational_cmp_benches);
