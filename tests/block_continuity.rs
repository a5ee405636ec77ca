use rstest::rstest;
use ts808_dsp::{EngineConfig, ParamSnapshot, Processor};

fn program(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 48_000.0;
            0.4 * (std::f64::consts::TAU * 220.0 * t).sin() + 0.2 * (std::f64::consts::TAU * 3_100.0 * t).sin()
        })
        .collect()
}

fn render(input: &[f64], block: usize, params: ParamSnapshot) -> Vec<f64> {
    let mut processor = Processor::new(EngineConfig::default()).unwrap();
    let mut output = vec![0.0; input.len()];
    for (inp, out) in input.chunks(block).zip(output.chunks_mut(block)) {
        assert!(processor.process_block(params, inp, &mut [out]).is_rendered());
    }
    output
}

#[rstest]
#[case(32)]
#[case(64)]
#[case(128)]
#[case(256)]
#[case(512)]
fn one_double_block_equals_two_single_blocks(#[case] block: usize) {
    let params = ParamSnapshot::new(0.7, 0.35, 0.6);
    let input = program(4 * block);
    let halves = render(&input, block, params);
    let wholes = render(&input, 2 * block, params);
    assert_eq!(halves, wholes);
}

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(1.0)]
fn dc_input_settles_to_constant_output(#[case] gain: f64) {
    // The ground-leg high-pass takes DC out of the clipping demand, so a held
    // input ends up as a held output regardless of drive.
    let input = vec![0.1; 12_288];
    let out = render(&input, 1024, ParamSnapshot::new(gain, 0.5, 0.5));
    let settled = &out[8_000..];
    let first = settled[0];
    for v in settled {
        assert!((v - first).abs() < 1e-9, "drift {} vs {}", v, first);
    }
}
