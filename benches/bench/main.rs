// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod convert;
mod derive;
mod samples;

criterion_main!(convert::benches, derive::benches);
