extern crate intlit;

use intlit::lit;

fn main() {
    let _negative = lit!(-1_u32); //~ ERROR cannot negate a u32 literal
    let _wide = lit!(100_u128); //~ ERROR unknown integer suffix `u128`
    let _plain = lit!(100); //~ ERROR has no integer suffix
}
