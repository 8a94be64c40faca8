extern crate intlit;

use intlit::lit;

fn main() {
    let _fits = lit!(127_i8);
    let _over = lit!(128_i8); //~ ERROR i8 literal out of range
    let _min = lit!(-128_i8); //~ ERROR i8 literal out of range
    let _short = lit!(-32768_i16); //~ ERROR i16 literal out of range
    let _word = lit!(0x8000_0000_i32); //~ ERROR i32 literal out of range
    let _long = lit!(-0x8000_0000_0000_0000_i64); //~ ERROR i64 literal out of range
}
