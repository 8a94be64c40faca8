extern crate intlit;

use intlit::{int, lit};

const MASK: u8 = lit!(0xFF_u8);
const PORT: u16 = int!(u16, 0x1F90);
const DEPTH: usize = int!(usize, 0o17);

fn main() {
    assert_eq!(MASK, 255);
    assert_eq!(PORT, 8080);
    assert_eq!(DEPTH, 15);

    let bin1: u64 = int!(u64, 0b101);
    let oct1: u64 = int!(u64, 0101);
    let dec1: u64 = int!(u64, 101);
    let hex1: u64 = int!(u64, 0xfeF1);
    assert_eq!((bin1, oct1, dec1, hex1), (5, 65, 101, 0xfeF1));

    let signed: i8 = int!(i8, -127);
    assert_eq!(signed, -127);
    assert_eq!(i8::MIN, -128);
}
