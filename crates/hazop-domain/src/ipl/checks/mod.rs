use crate::model::Ipl;
use hazop_types::Finding;

mod bpcs;
mod human_intervention;
mod independence;
mod pfd;
mod sif;
mod structure;
pub(crate) mod utils;


/// Required fields; any error here stops the pipeline.
pub fn run_structure(ipl: &Ipl, out: &mut Vec<Finding>) {
    structure::run(ipl, out);
}

/// Every check that assumes a structurally sound layer.
pub fn run_all(ipl: &Ipl, out: &mut Vec<Finding>) {
    pfd::run(ipl, out);
    independence::run(ipl, out);
    sif::run(ipl, out);
    human_intervention::run(ipl, out);
    bpcs::run(ipl, out);
}
