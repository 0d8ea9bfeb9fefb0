//! Raw bit-pattern rendering for primitive scalars.

/// Primitives whose in-memory representation can be shown as bits.
pub trait BitPattern: Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// The raw bits, zero-extended to 128.
    fn raw_bits(self) -> u128;
}

macro_rules! int_pattern {
    ($($t:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl BitPattern for $t {
                const BITS: u32 = <$t>::BITS;

                fn raw_bits(self) -> u128 {
                    self as $unsigned as u128
                }
            }
        )+
    };
}

int_pattern!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
);

impl BitPattern for f32 {
    const BITS: u32 = 32;

    fn raw_bits(self) -> u128 {
        self.to_bits() as u128
    }
}

impl BitPattern for f64 {
    const BITS: u32 = 64;

    fn raw_bits(self) -> u128 {
        self.to_bits() as u128
    }
}

/// Render `value` as exactly `T::BITS` binary digits, most significant first.
///
/// ```
/// use tessel_support::to_bits;
///
/// assert_eq!(to_bits(5u8), "00000101");
/// assert_eq!(to_bits(-1i16), "1111111111111111");
/// assert_eq!(to_bits(1.0f32), "00111111100000000000000000000000");
/// ```
pub fn to_bits<T: BitPattern>(value: T) -> String {
    format!("{:0width$b}", value.raw_bits(), width = T::BITS as usize)
}
