//! Shared fixtures for unit tests.
//!
//! The "baasie" fingerprints are spot annotations of three photographs of the
//! same animal from the I3S sample data set.

use crate::fingerprint::Fingerprint;

pub(crate) const BAASIE1_REFS: [[f64; 2]; 3] = [[419.0, 275.0], [670.0, 325.0], [515.0, 483.0]];
pub(crate) const BAASIE1_SPOTS: [[f64; 2]; 19] = [
    [320.0, 449.0],
    [333.0, 386.0],
    [340.0, 397.0],
    [350.0, 373.0],
    [371.0, 378.0],
    [372.0, 403.0],
    [370.0, 449.0],
    [415.0, 428.0],
    [415.0, 352.0],
    [432.0, 418.0],
    [464.0, 387.0],
    [469.0, 404.0],
    [492.0, 410.0],
    [501.0, 372.0],
    [519.0, 417.0],
    [564.0, 412.0],
    [633.0, 364.0],
    [668.0, 366.0],
    [727.0, 399.0],
];

pub(crate) const BAASIE2_REFS: [[f64; 2]; 3] = [[453.0, 273.0], [868.0, 373.0], [617.0, 620.0]];
pub(crate) const BAASIE2_SPOTS: [[f64; 2]; 30] = [
    [210.0, 517.0],
    [228.0, 509.0],
    [282.0, 585.0],
    [291.0, 563.0],
    [315.0, 460.0],
    [329.0, 480.0],
    [343.0, 438.0],
    [375.0, 565.0],
    [378.0, 451.0],
    [382.0, 490.0],
    [390.0, 576.0],
    [457.0, 530.0],
    [488.0, 519.0],
    [545.0, 464.0],
    [551.0, 493.0],
    [594.0, 500.0],
    [608.0, 442.0],
    [637.0, 512.0],
    [694.0, 412.0],
    [712.0, 473.0],
    [713.0, 513.0],
    [787.0, 451.0],
    [829.0, 434.0],
    [889.0, 446.0],
    [949.0, 500.0],
    [982.0, 441.0],
    [996.0, 498.0],
    [1043.0, 388.0],
    [1067.0, 487.0],
    [1075.0, 449.0],
];

pub(crate) const BAASIE3_REFS: [[f64; 2]; 3] = [[294.0, 186.0], [703.0, 224.0], [460.0, 489.0]];
pub(crate) const BAASIE3_SPOTS: [[f64; 2]; 22] = [
    [170.0, 487.0],
    [167.0, 464.0],
    [166.0, 376.0],
    [181.0, 385.0],
    [189.0, 367.0],
    [189.0, 350.0],
    [227.0, 393.0],
    [287.0, 308.0],
    [303.0, 422.0],
    [381.0, 375.0],
    [421.0, 381.0],
    [464.0, 387.0],
    [509.0, 283.0],
    [539.0, 379.0],
    [601.0, 311.0],
    [601.0, 342.0],
    [646.0, 289.0],
    [705.0, 297.0],
    [769.0, 355.0],
    [817.0, 346.0],
    [888.0, 330.0],
    [900.0, 288.0],
];

pub(crate) fn baasie1() -> Fingerprint {
    Fingerprint::from_spots(BAASIE1_REFS, &BAASIE1_SPOTS)
}

pub(crate) fn baasie2() -> Fingerprint {
    Fingerprint::from_spots(BAASIE2_REFS, &BAASIE2_SPOTS)
}

pub(crate) fn baasie3() -> Fingerprint {
    Fingerprint::from_spots(BAASIE3_REFS, &BAASIE3_SPOTS)
}

/// Reference triangle `[[0,0],[100,0],[100,100]]` with five spots on its diagonal.
pub(crate) fn diagonal_fingerprint() -> Fingerprint {
    Fingerprint::from_spots(
        [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]],
        &[
            [10.0, 10.0],
            [20.0, 20.0],
            [30.0, 30.0],
            [40.0, 40.0],
            [50.0, 50.0],
        ],
    )
}
