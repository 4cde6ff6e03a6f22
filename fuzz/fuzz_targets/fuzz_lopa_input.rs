//! Fuzz target for the LOPA calculation.
//!
//! Goal: any combination of frequencies and PFDs (NaN, infinities, negatives) is either
//! rejected with `LopaError` or produces a finite result. Never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_lopa_input
//! ```

#![no_main]

use arbitrary::Arbitrary;
use hazop_domain::{Ipl, IplType, LopaInput, perform_lopa_calculation};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct CaseInput {
    initiating_event_frequency: f64,
    target_frequency: f64,
    pfds: Vec<f64>,
}

fuzz_target!(|input: CaseInput| {
    if input.pfds.len() > 32 {
        return;
    }

    let ipls = input
        .pfds
        .iter()
        .enumerate()
        .map(|(i, &pfd)| Ipl {
            id: format!("ipl-{i}"),
            name: format!("layer {i}"),
            ipl_type: IplType::ALL[i % IplType::ALL.len()],
            description: String::new(),
            pfd,
            independent_of_initiator: true,
            independent_of_other_ipls: true,
            sil: None,
            human_intervention: None,
        })
        .collect();

    let case = LopaInput {
        initiating_event_frequency: input.initiating_event_frequency,
        ipls,
        target_frequency: input.target_frequency,
    };

    if let Ok(result) = perform_lopa_calculation(&case) {
        assert!(result.total_rrf.is_finite());
        assert!(result.gap_ratio.is_finite());
    }
});
