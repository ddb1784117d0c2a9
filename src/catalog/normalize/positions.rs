//! Track position planning.
//!
//! Turns a release's raw position strings into (track, disc) numbering.
//! Index entries must already be filtered out by the caller; every
//! position handed in here represents an audio track.
//!
//! Only multi-disc CD releases use the "<disc>-<track>" position scheme.
//! Vinyl positions use side letters ("A1", "B2"), so a multi-record vinyl
//! set is numbered as one logical disc in input order.

use crate::catalog::domain::{CatalogError, FormatFamily};

/// Planned numbering for one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPosition {
    pub track_number: u32,
    pub track_total: u32,
    pub disc_number: u32,
    pub disc_total: u32,
}

/// Plan numbering for an ordered list of position strings.
///
/// The multi-disc algorithm applies only to CDs with a declared quantity
/// above one; everything else is numbered as a single disc regardless of
/// how many physical records the format metadata claims.
pub fn plan_positions(
    family: FormatFamily,
    quantity: u32,
    positions: &[&str],
) -> Result<Vec<TrackPosition>, CatalogError> {
    if quantity == 0 {
        return Err(CatalogError::InvalidArgument(
            "format quantity must be at least 1".to_string(),
        ));
    }

    if family == FormatFamily::Cd && quantity > 1 {
        plan_multi_disc(quantity, positions)
    } else {
        Ok(plan_single_disc(positions))
    }
}

fn plan_single_disc(positions: &[&str]) -> Vec<TrackPosition> {
    let track_total = positions.len() as u32;
    (1..=track_total)
        .map(|track_number| TrackPosition {
            track_number,
            track_total,
            disc_number: 1,
            disc_total: 1,
        })
        .collect()
}

fn plan_multi_disc(
    quantity: u32,
    positions: &[&str],
) -> Result<Vec<TrackPosition>, CatalogError> {
    // First pass: per-disc track totals. The tracked disc number advances
    // sequentially by one on every change of the embedded disc label; the
    // literal label values are not trusted.
    let mut totals: Vec<u32> = Vec::new();
    let mut tracked_disc = 1u32;
    let mut counter = 1u32;
    for position in positions {
        let embedded = parse_disc_label(position)?;
        if embedded != tracked_disc {
            totals.push(counter - 1);
            counter = 1;
            tracked_disc += 1;
        }
        counter += 1;
    }
    if !positions.is_empty() {
        totals.push(counter - 1);
    }

    // Second pass: assign numbers, rolling over to the next disc when the
    // running counter reaches the precomputed total. disc_total reports
    // the declared quantity even when fewer discs appear in the data.
    let mut planned = Vec::with_capacity(positions.len());
    let mut disc_index = 0usize;
    let mut counter = 1u32;
    for _ in positions {
        let track_total = totals[disc_index];
        planned.push(TrackPosition {
            track_number: counter,
            track_total,
            disc_number: disc_index as u32 + 1,
            disc_total: quantity,
        });
        if counter == track_total && disc_index + 1 < totals.len() {
            disc_index += 1;
            counter = 1;
        } else {
            counter += 1;
        }
    }

    Ok(planned)
}

/// Parse the disc label out of a "<disc>-<track>" position string.
fn parse_disc_label(position: &str) -> Result<u32, CatalogError> {
    position
        .split_once('-')
        .and_then(|(disc, _)| disc.parse().ok())
        .ok_or_else(|| {
            CatalogError::MalformedReleaseData(format!(
                "position {position:?} is not in <disc>-<track> form"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(family: FormatFamily, quantity: u32, positions: &[&str]) -> Vec<TrackPosition> {
        plan_positions(family, quantity, positions).expect("plan should succeed")
    }

    #[test]
    fn test_single_disc_thirteen_tracks() {
        let positions: Vec<String> = (1..=13).map(|n| n.to_string()).collect();
        let positions: Vec<&str> = positions.iter().map(String::as_str).collect();

        let planned = plan(FormatFamily::Cd, 1, &positions);

        assert_eq!(planned.len(), 13);
        for (i, pos) in planned.iter().enumerate() {
            assert_eq!(pos.track_number, i as u32 + 1);
            assert_eq!(pos.track_total, 13);
            assert_eq!(pos.disc_number, 1);
            assert_eq!(pos.disc_total, 1);
        }
    }

    #[test]
    fn test_multi_disc_two_by_thirteen() {
        let positions: Vec<String> = (1..=13)
            .map(|n| format!("1-{n}"))
            .chain((1..=13).map(|n| format!("2-{n}")))
            .collect();
        let positions: Vec<&str> = positions.iter().map(String::as_str).collect();

        let planned = plan(FormatFamily::Cd, 2, &positions);

        assert_eq!(planned.len(), 26);
        for (i, pos) in planned[..13].iter().enumerate() {
            assert_eq!(pos.track_number, i as u32 + 1);
            assert_eq!(pos.track_total, 13);
            assert_eq!(pos.disc_number, 1);
            assert_eq!(pos.disc_total, 2);
        }
        for (i, pos) in planned[13..].iter().enumerate() {
            assert_eq!(pos.track_number, i as u32 + 1);
            assert_eq!(pos.track_total, 13);
            assert_eq!(pos.disc_number, 2);
            assert_eq!(pos.disc_total, 2);
        }
    }

    #[test]
    fn test_uneven_disc_lengths() {
        let positions = ["1-1", "1-2", "1-3", "2-1", "2-2"];

        let planned = plan(FormatFamily::Cd, 2, &positions);

        assert_eq!(planned[2].track_total, 3);
        assert_eq!(planned[2].disc_number, 1);
        assert_eq!(planned[3].track_number, 1);
        assert_eq!(planned[3].track_total, 2);
        assert_eq!(planned[3].disc_number, 2);
    }

    #[test]
    fn test_vinyl_quantity_two_stays_single_disc() {
        // Two records, but vinyl never uses the disc-hyphen scheme.
        let positions = ["1", "2", "3", "4"];

        let planned = plan(FormatFamily::Vinyl, 2, &positions);

        for pos in &planned {
            assert_eq!(pos.disc_number, 1);
            assert_eq!(pos.disc_total, 1);
        }
        assert_eq!(planned[3].track_number, 4);
        assert_eq!(planned[3].track_total, 4);
    }

    #[test]
    fn test_fewer_discs_than_declared_trusts_quantity() {
        // The data only shows two discs; disc_total still reports the
        // declared three.
        let positions = ["1-1", "1-2", "2-1"];

        let planned = plan(FormatFamily::Cd, 3, &positions);

        assert_eq!(planned[0].track_total, 2);
        assert_eq!(planned[2].disc_number, 2);
        assert_eq!(planned[2].track_total, 1);
        for pos in &planned {
            assert_eq!(pos.disc_total, 3);
        }
    }

    #[test]
    fn test_disc_numbers_are_sequential_not_literal() {
        // The second disc is labeled 3 in the data; it still numbers as 2.
        let positions = ["1-1", "1-2", "3-1"];

        let planned = plan(FormatFamily::Cd, 2, &positions);

        assert_eq!(planned[0].disc_number, 1);
        assert_eq!(planned[2].disc_number, 2);
        assert_eq!(planned[2].track_number, 1);
        assert_eq!(planned[2].track_total, 1);
    }

    #[test]
    fn test_empty_positions() {
        let planned = plan(FormatFamily::Cd, 2, &[]);
        assert!(planned.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_invalid_argument() {
        let result = plan_positions(FormatFamily::Cd, 0, &["1"]);
        assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
    }

    #[test]
    fn test_plain_position_in_multi_disc_mode_is_malformed() {
        let result = plan_positions(FormatFamily::Cd, 2, &["1", "2"]);
        assert!(matches!(
            result,
            Err(CatalogError::MalformedReleaseData(_))
        ));
    }

    #[test]
    fn test_non_numeric_disc_label_is_malformed() {
        let result = plan_positions(FormatFamily::Cd, 2, &["A-1"]);
        assert!(matches!(
            result,
            Err(CatalogError::MalformedReleaseData(_))
        ));
    }
}
