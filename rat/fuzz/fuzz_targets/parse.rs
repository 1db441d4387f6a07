#![no_main]
use libfuzzer_sys::fuzz_target;

use librat::{BigInt, Rational};

fuzz_target!(|text: String| {
    let value: Rational = match text.parse() {
        Ok(value) => value,
        Err(_) => return,
    };

    if *value.denominator() <= BigInt::from(0) {
        panic!("non-positive denominator in {}", value);
    }

    let rebuilt = Rational::new(value.numerator().clone(), value.denominator().clone()).unwrap();
    if rebuilt.numerator() != value.numerator() {
        panic!("{:?} parsed to unreduced {}", text, value);
    }

    let printed: Rational = value.to_string().parse().unwrap();
    if printed != value {
        panic!("{} did not read back from its display form", value);
    }
});
