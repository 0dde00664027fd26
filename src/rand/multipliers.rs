/// Odd 64-bit multipliers for the state transition. Odd keeps the multiply a
/// bijection on u64.
pub const MULTIPLIERS: [u64; 8] = [
    0x9e3779b97f4a7c15,
    0xbf58476d1ce4e5b9,
    0x94d049bb133111eb,
    0xff51afd7ed558ccd,
    0xc4ceb9fe1a85ec53,
    0xd1342543de82ef95,
    0x2545f4914f6cdd1d,
    0x5851f42d4c957f2d,
];
