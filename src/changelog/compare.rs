//! Version normalization and ordering
//!
//! Deliberately simpler than semver: components are compared numerically
//! after stripping a leading `v`, and malformed components count as `0`.

use std::cmp::Ordering;

/// Strip a single leading `v` from a version string.
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Whether `requested` is strictly newer than `installed`.
///
/// Missing trailing components are treated as `0`, so `1.2` equals `1.2.0`.
pub fn is_newer(requested: &str, installed: &str) -> bool {
    let requested = normalize_version(requested);
    let installed = normalize_version(installed);

    if requested == installed {
        return false;
    }

    compare_components(requested, installed) == Ordering::Greater
}

fn compare_components(left: &str, right: &str) -> Ordering {
    let left: Vec<u64> = left.split('.').map(numeric_component).collect();
    let right: Vec<u64> = right.split('.').map(numeric_component).collect();
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Numeric value of the leading digits of a component.
///
/// `"3-beta"` -> 3, `"rc1"` -> 0. Values past `u64::MAX` saturate.
fn numeric_component(component: &str) -> u64 {
    let component = component.trim_start();
    let digits_len = component.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    component[..digits_len].parse().unwrap_or(u64::MAX)
}
