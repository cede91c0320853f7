//! Query parameter reconciliation.
//!
//! When the URL or bulk text is edited, the parameter list is re-derived
//! from that edit. A naive re-parse would silently drop every disabled
//! parameter, since disabled entries are by definition absent from the
//! synthesized URL. Reconciliation merges the freshly parsed list with the
//! previously held one so disabled rows survive the edit.

use satchel_domain::{QueryParam, QueryParams};

/// Merges a freshly parsed parameter list with the previously held list.
///
/// Walks `previous` in order. Each disabled entry that has no `(key, value)`
/// match in the partially merged result is spliced back in near its original
/// position; the insertion index grows by one per reinsertion so reinserted
/// entries keep their relative order. Enabled previous entries are never
/// reinserted: if still relevant they are already present in `incoming`,
/// otherwise they were intentionally dropped by the edit.
#[must_use]
pub fn reconcile_query_params(incoming: &QueryParams, previous: &QueryParams) -> QueryParams {
    let mut merged: Vec<QueryParam> = incoming.all().to_vec();
    let mut offset = 1;

    for (index, prior) in previous.all().iter().enumerate() {
        if prior.enabled {
            continue;
        }

        let found = merged
            .iter()
            .position(|p| p.key == prior.key && p.value == prior.value);

        match found {
            None => {
                let at = (index + offset).min(merged.len());
                merged.insert(at, prior.clone());
                offset += 1;
            }
            Some(at) => {
                merged[at] = on_reappearance(&merged[at], prior);
            }
        }
    }

    merged.into_iter().collect()
}

/// Policy for a disabled parameter that reappears verbatim in the new URL.
///
/// The parsed entry wins, so the parameter comes back enabled. The
/// alternative — keeping the user's disabled flag by returning a clone of
/// `previously_disabled` — is a single-line swap here and must not leak
/// into the reconciliation walk above.
fn on_reappearance(parsed: &QueryParam, _previously_disabled: &QueryParam) -> QueryParam {
    parsed.clone()
}
