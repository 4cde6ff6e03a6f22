//! The compiled-in catalog, grouped by issuing jurisdiction.

use crate::model::RegulatoryStandard;

mod europe;
mod international;
mod us;

/// Catalog order is the iteration order of every registry query.
pub(crate) static STANDARDS: &[RegulatoryStandard] = &[
    us::OSHA_PSM,
    us::EPA_RMP,
    us::CCPS_LOPA,
    us::API_RP_14C,
    international::IEC_61511,
    international::IEC_61508,
    international::IEC_61882,
    international::ISO_31000,
    international::ISO_17776,
    europe::SEVESO_III,
    europe::UK_COMAH,
];
