extern crate intlit;

use intlit::lit;

fn main() {
    let _bin = lit!(0b1_1111_1111_u8); //~ ERROR u8 literal out of range
    let _oct = lit!(0777_u8); //~ ERROR u8 literal out of range
    let _dec = lit!(257_u8); //~ ERROR u8 literal out of range
    let _hex = lit!(0xff01_u8); //~ ERROR u8 literal out of range
    let _short = lit!(0x1_0000_u16); //~ ERROR u16 literal out of range
    let _word = lit!(0xffff12345_u32); //~ ERROR u32 literal out of range
}
