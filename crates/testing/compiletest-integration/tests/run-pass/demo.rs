extern crate intlit;

use intlit::lit;

fn main() {
    {
        let bin1: u64 = lit!(0b101_u64);
        let oct1: u64 = lit!(0101_u64);
        let dec1: u64 = lit!(101_u64);
        let hex1: u64 = lit!(0xfeF1_u64);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let bin1: u32 = lit!(0b101_u32);
        let oct1: u32 = lit!(0101_u32);
        let dec1: u32 = lit!(101_u32);
        let hex1: u32 = lit!(0xfeF1_u32);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let bin1: u16 = lit!(0b101_u16);
        let oct1: u16 = lit!(0101_u16);
        let dec1: u16 = lit!(101_u16);
        let hex1: u16 = lit!(0xfeF1_u16);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let bin1: u8 = lit!(0b101_u8);
        let oct1: u8 = lit!(0101_u8);
        let dec1: u8 = lit!(101_u8);
        let hex1: u8 = lit!(0xF1_u8);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xF1);
    }

    {
        let bin1: i64 = lit!(0b101_i64);
        let oct1: i64 = lit!(0101_i64);
        let dec1: i64 = lit!(-101_i64);
        let hex1: i64 = lit!(0xfeF1_i64);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, -101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let bin1: i32 = lit!(0b101_i32);
        let oct1: i32 = lit!(-0101_i32);
        let dec1: i32 = lit!(101_i32);
        let hex1: i32 = lit!(0xfeF1_i32);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, -0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let bin1: i16 = lit!(-0b101_i16);
        let oct1: i16 = lit!(0101_i16);
        let dec1: i16 = lit!(101_i16);
        let hex1: i16 = lit!(0x7eF1_i16);
        assert_eq!(bin1, -0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0x7eF1);
    }

    {
        let bin1: i8 = lit!(0b101_i8);
        let oct1: i8 = lit!(0101_i8);
        let dec1: i8 = lit!(101_i8);
        let hex1: i8 = lit!(-0x7F_i8);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, -0x7F);
    }

    {
        let bin1: usize = lit!(0b101_z);
        let oct1: usize = lit!(0101_z);
        let dec1: usize = lit!(101_z);
        let hex1: usize = lit!(0xfeF1_z);
        assert_eq!(bin1, 0b101);
        assert_eq!(oct1, 0o101);
        assert_eq!(dec1, 101);
        assert_eq!(hex1, 0xfeF1);
    }

    {
        let ux: u32 = lit!(100_u32);
        let uy: u64 = lit!(100_u64);
        let uz: u8 = lit!(0xFF_u8);
        let ix: i32 = lit!(100_i32);
        let iy: i64 = lit!(100_i64);
        let iz: i8 = lit!(-50_i8);
        let sz: usize = lit!(100_z);
        assert_eq!((ux, uy, uz), (100, 100, 255));
        assert_eq!((ix, iy, iz), (100, 100, -50));
        assert_eq!(sz, 100);
    }

    {
        assert_eq!(lit!(255_u8), u8::MAX);
        assert_eq!(lit!(65535_u16), u16::MAX);
        assert_eq!(lit!(4294967295_u32), u32::MAX);
        assert_eq!(lit!(0xFFFF_FFFF_FFFF_FFFF_u64), u64::MAX);
        assert_eq!(lit!(127_i8), i8::MAX);
        assert_eq!(lit!(-127_i8), i8::MIN + 1);
        assert_eq!(lit!(0x7FFF_FFFF_FFFF_FFFF_i64), i64::MAX);
    }
}
