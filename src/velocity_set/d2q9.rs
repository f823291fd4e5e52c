use crate::constants::Float;

pub(super) const D: usize = 2;

pub(super) const Q: usize = 9;

// Rest, then clockwise from north.
pub(super) const C: [[i32; D]; Q] = [
    [0, 0],
    [0, 1],
    [1, 1],
    [1, 0],
    [1, -1],
    [0, -1],
    [-1, -1],
    [-1, 0],
    [-1, 1],
];

pub(super) const W: [Float; Q] = [
    4.0 / 9.0,
    1.0 / 9.0,
    1.0 / 36.0,
    1.0 / 9.0,
    1.0 / 36.0,
    1.0 / 9.0,
    1.0 / 36.0,
    1.0 / 9.0,
    1.0 / 36.0,
];

pub(super) const Q_BAR: [usize; Q] = [0, 5, 6, 7, 8, 1, 2, 3, 4];
