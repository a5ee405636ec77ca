//! Anti-aliasing low-pass used when returning from 192 kHz to 48 kHz.
//!
//! 109-tap linear-phase FIR: Kaiser-windowed sinc (beta 8) with its cutoff
//! at 22 kHz, normalised to unity gain at DC. The taps are symmetric, so the
//! filter delays by 54 oversampled samples (13.5 base-rate samples).

pub const DECIMATION_TAP_COUNT: usize = 109;

/// Taps per polyphase branch once the kernel is split four ways and each
/// branch is zero-padded to the same length.
pub const BRANCH_TAP_COUNT: usize = DECIMATION_TAP_COUNT.div_ceil(crate::OVERSAMPLING);

#[rustfmt::skip]
pub static DECIMATION_TAPS: [f64; DECIMATION_TAP_COUNT] = [
    1.2737406379445896e-05, 1.0432032195764026e-05, -9.44385039128446e-06,
    -4.412381008716637e-05, -7.33277873856091e-05, -6.584856429405002e-05,
    6.446343244150002e-19, 0.00011200820204751806, 0.00021387839451433648,
    0.00022456673178800326, 8.644995868260059e-05, -0.00018074537444995109,
    -0.00045753095957729956, -0.000563445035891226, -0.00035471473698921543,
    0.00016386078368734908, 0.0007838890705296323, 0.0011530657335615056,
    0.0009504238367346456, 0.00010174391021157445, -0.0010910039563913879,
    -0.0020163264040473088, -0.0020342212625164982, -0.0008594984843332397,
    0.0011608564680986864, 0.0030767199734521864, 0.0037363770352820264,
    0.0024167411284665395, -0.0006369550008132115, -0.004106697691047871,
    -0.006101854635528578, -0.005115920956803876, -0.0009889701687891223,
    0.004681401611715551, 0.009043126037540618, 0.009323149692197163,
    0.004415644943635972, -0.004117240050586191, -0.012319896559672356,
    -0.015511482468152168, -0.010720569612747864, 0.001285447773923025,
    0.015559391040410167, 0.024686477193690985, 0.02219019077827571,
    0.006214833011497137, -0.018318890562354733, -0.04042709976437677,
    -0.04679606368475489, -0.02726715032920829, 0.020177670015603107,
    0.08721030078758445, 0.15698924461770214, 0.20961227920113035,
    0.22917222868130438, 0.20961227920113035, 0.15698924461770214,
    0.08721030078758445, 0.020177670015603107, -0.02726715032920829,
    -0.04679606368475489, -0.04042709976437677, -0.018318890562354733,
    0.006214833011497137, 0.02219019077827571, 0.024686477193690985,
    0.015559391040410167, 0.001285447773923025, -0.010720569612747864,
    -0.015511482468152168, -0.012319896559672356, -0.004117240050586191,
    0.004415644943635972, 0.009323149692197163, 0.009043126037540618,
    0.004681401611715551, -0.0009889701687891223, -0.005115920956803876,
    -0.006101854635528578, -0.004106697691047871, -0.0006369550008132115,
    0.0024167411284665395, 0.0037363770352820264, 0.0030767199734521864,
    0.0011608564680986864, -0.0008594984843332397, -0.0020342212625164982,
    -0.0020163264040473088, -0.0010910039563913879, 0.00010174391021157445,
    0.0009504238367346456, 0.0011530657335615056, 0.0007838890705296323,
    0.00016386078368734908, -0.00035471473698921543, -0.000563445035891226,
    -0.00045753095957729956, -0.00018074537444995109, 8.644995868260059e-05,
    0.00022456673178800326, 0.00021387839451433648, 0.00011200820204751806,
    6.446343244150002e-19, -6.584856429405002e-05, -7.33277873856091e-05,
    -4.412381008716637e-05, -9.44385039128446e-06, 1.0432032195764026e-05,
    1.2737406379445896e-05,
];

const fn branch(phase: usize) -> [f64; BRANCH_TAP_COUNT] {
    let mut out = [0.0; BRANCH_TAP_COUNT];
    let mut j = 0;
    while j < BRANCH_TAP_COUNT {
        let i = crate::OVERSAMPLING * j + phase;
        if i < DECIMATION_TAP_COUNT {
            out[j] = DECIMATION_TAPS[i];
        }
        j += 1;
    }
    out
}

/// `DECIMATION_BRANCHES[r][j] == DECIMATION_TAPS[4 * j + r]`, zero past the end.
pub static DECIMATION_BRANCHES: [[f64; BRANCH_TAP_COUNT]; crate::OVERSAMPLING] =
    [branch(0), branch(1), branch(2), branch(3)];
