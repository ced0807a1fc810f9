use crate::models::{Candidate, FilterState};

/// Check a candidate against the client-side filter predicates.
///
/// Applied on top of the server's coarse query (role, limit); predicates
/// run in order: verification, rating floor, price ceiling.
#[inline]
pub fn matches_filters(candidate: &Candidate, filters: &FilterState) -> bool {
    // Verification
    if filters.verified_only && !candidate.verified {
        return false;
    }

    // Rating floor; an unrated tutor counts as 0
    if filters.min_rating > 0.0 && candidate.rating_or_zero() < filters.min_rating {
        return false;
    }

    // Price ceiling applies only when a rate is listed
    if let Some(rate) = candidate.hourly_rate {
        if rate > filters.max_price {
            return false;
        }
    }

    true
}

/// Apply the client-side filters, preserving input order.
///
/// Pure and side-effect-free: re-applying the same filters to the same
/// list yields an identical result.
pub fn filter_candidates(candidates: &[Candidate], filters: &FilterState) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|candidate| matches_filters(candidate, filters))
        .cloned()
        .collect()
}
