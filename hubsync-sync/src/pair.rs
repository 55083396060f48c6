//! The `zip_pairs` merge-join.
//!
//! Pairs two collections by a totally-ordered key without hashing: both
//! sides are sorted, then consumed smallest-key-first, pairing equal keys
//! together and emitting unmatched elements against `None`. Every input
//! element appears in exactly one output pair; a pair with both sides
//! absent is never produced. Output order is not part of the contract —
//! compare results as multisets.

/// One matched (or half-matched) pairing of a local and a remote entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pair<L, R> {
    pub local: Option<L>,
    pub remote: Option<R>,
}

enum Take {
    Both,
    LocalOnly,
    RemoteOnly,
}

/// Merge-join `locals` and `remotes` on the keys extracted per side.
///
/// Duplicate keys within a side pair off one-to-one against the other
/// side's supply of that key; leftovers pair against `None`. O(n log n).
pub fn zip_pairs<L, R, K, KL, KR>(
    locals: Vec<L>,
    remotes: Vec<R>,
    local_key: KL,
    remote_key: KR,
) -> Vec<Pair<L, R>>
where
    K: Ord,
    KL: Fn(&L) -> K,
    KR: Fn(&R) -> K,
{
    // Descending sort so popping from the tail yields ascending keys.
    let mut xs = locals;
    let mut ys = remotes;
    xs.sort_by(|a, b| local_key(b).cmp(&local_key(a)));
    ys.sort_by(|a, b| remote_key(b).cmp(&remote_key(a)));

    let mut pairs = Vec::with_capacity(xs.len().max(ys.len()));
    loop {
        let take = match (xs.last(), ys.last()) {
            (None, None) => break,
            (Some(_), None) => Take::LocalOnly,
            (None, Some(_)) => Take::RemoteOnly,
            (Some(x), Some(y)) => {
                let kx = local_key(x);
                let ky = remote_key(y);
                if kx == ky {
                    Take::Both
                } else if kx < ky {
                    // Tails hold the smallest remaining keys; the smaller
                    // tail can never match anything on the other side.
                    Take::LocalOnly
                } else {
                    Take::RemoteOnly
                }
            }
        };
        pairs.push(match take {
            Take::Both => Pair {
                local: xs.pop(),
                remote: ys.pop(),
            },
            Take::LocalOnly => Pair {
                local: xs.pop(),
                remote: None,
            },
            Take::RemoteOnly => Pair {
                local: None,
                remote: ys.pop(),
            },
        });
    }
    pairs
}
