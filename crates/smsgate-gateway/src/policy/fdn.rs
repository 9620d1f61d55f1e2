//! Fixed Dialing Number allow-list evaluation.
//!
//! An FDN-restricted line may only message (destination, service-center)
//! pairs where both numbers are present in the SIM's FDN file. Matching the
//! destination alone would let a spoofed message center route around the
//! restriction, so both ends must be allow-listed.

use smsgate_core::types::FdnRecord;

/// True when the FDN policy blocks this (destination, smsc) pair.
///
/// Emergency destinations are never blocked, whatever the list contents.
/// Matching is exact string equality on the stored number; an FDN file that
/// has not finished loading shows up here as an empty list and blocks every
/// non-emergency send. The caller is responsible for only invoking this when
/// FDN is available and enabled on the line.
pub fn is_blocked_by_fdn(
    records: &[FdnRecord],
    dest_addr: &str,
    smsc_addr: &str,
    dest_is_emergency: bool,
) -> bool {
    if dest_is_emergency {
        return false;
    }
    !(contains_number(records, dest_addr) && contains_number(records, smsc_addr))
}

fn contains_number(records: &[FdnRecord], number: &str) -> bool {
    records.iter().any(|r| r.number == number)
}
