// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand per category over all completions of a partial hand.
use ahash::AHashMap;

use showdown_cards::{Card, CardSet, Rank, Suit};

use crate::{Category, EvalError, HandRank, classify};

/// Creates the table of nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 {
            if k <= n {
                // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
                t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            }
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    if k > n { 0 } else { NCKS[n][k] as usize }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets starting from the nth ksubset.
fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    for i in 0..k {
        c[i + 1] = ks[i];
    }

    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Completes a partial hand in every way and keeps the best hand per
/// category.
///
/// Every completion of `partial` to `target` cards with cards from `pool`
/// is classified, the returned map holds the strongest [HandRank] seen for
/// each reachable [Category].
///
/// The cost grows with nck(pool, target - partial), for the worst case of
/// completing 2 cards to 7 from a 47 cards pool that is 1,533,939
/// completions; callers needing a bound should cap the pool.
///
/// # Errors
///
/// Fails with [EvalError::TargetTooSmall] when the partial hand already
/// exceeds the target, and [EvalError::InsufficientCards] when the target
/// is below five cards or the pool cannot reach it.
pub fn possible_hands(
    partial: &CardSet,
    pool: &CardSet,
    target: usize,
) -> Result<AHashMap<Category, HandRank>, EvalError> {
    let missing = validate(partial, pool, target)?;

    let mut best = AHashMap::new();
    let mut buf = hand_buffer(partial, target);

    if missing == 0 {
        merge_best(&mut best, classify::eval(&buf));
        return Ok(best);
    }

    let pool_cards = pool.cards();
    let n = pool_cards.len();
    for_each_ksubset(n, missing, 0, nck(n, missing), |subset| {
        for (pos, &idx) in subset.iter().enumerate() {
            buf[target - missing + pos] = pool_cards[idx];
        }
        merge_best(&mut best, classify::eval(&buf));
    });

    Ok(best)
}

/// Parallel [possible_hands] that splits the completions across
/// `num_tasks` tasks.
///
/// Each task classifies an independent slice of the combination space and
/// the per task results merge by the best per category, the reduction is
/// associative and commutative so the task count never changes the result.
#[cfg(feature = "parallel")]
pub fn par_possible_hands(
    num_tasks: usize,
    partial: &CardSet,
    pool: &CardSet,
    target: usize,
) -> Result<AHashMap<Category, HandRank>, EvalError> {
    assert!(num_tasks > 0);

    let missing = validate(partial, pool, target)?;
    if missing == 0 {
        return possible_hands(partial, pool, target);
    }

    let pool_cards = pool.cards();
    let n = pool_cards.len();
    let num_hands = nck(n, missing);
    let hands_per_task = num_hands.div_ceil(num_tasks);

    let mut best = AHashMap::new();
    std::thread::scope(|s| {
        let tasks = (0..num_tasks)
            .map(|task_id| task_id * hands_per_task)
            // With more tasks than combinations a task may start past the
            // end of the space.
            .filter(|&start| start < num_hands)
            .map(|start| {
                let count = hands_per_task.min(num_hands - start);
                s.spawn(move || {
                    let mut local = AHashMap::new();
                    let mut buf = hand_buffer(partial, target);

                    for_each_ksubset(n, missing, start, count, |subset| {
                        for (pos, &idx) in subset.iter().enumerate() {
                            buf[target - missing + pos] = pool_cards[idx];
                        }
                        merge_best(&mut local, classify::eval(&buf));
                    });

                    local
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            // A task only panics if classification does, propagate it.
            for (_, hand) in task.join().unwrap() {
                merge_best(&mut best, hand);
            }
        }
    });

    Ok(best)
}

fn validate(partial: &CardSet, pool: &CardSet, target: usize) -> Result<usize, EvalError> {
    if target < partial.len() {
        return Err(EvalError::TargetTooSmall {
            have: partial.len(),
            target,
        });
    }

    if target < 5 {
        return Err(EvalError::InsufficientCards {
            got: target,
            need: 5,
        });
    }

    let missing = target - partial.len();
    if pool.len() < missing {
        return Err(EvalError::InsufficientCards {
            got: partial.len() + pool.len(),
            need: target,
        });
    }

    Ok(missing)
}

/// A target sized buffer with the partial cards first, the tail gets
/// overwritten by each completion.
fn hand_buffer(partial: &CardSet, target: usize) -> Vec<Card> {
    let mut buf = vec![Card::new(Rank::Ace, Suit::Hearts); target];
    buf[..partial.len()].copy_from_slice(partial.cards());
    buf
}

fn merge_best(best: &mut AHashMap<Category, HandRank>, hand: HandRank) {
    best.entry(hand.category())
        .and_modify(|cur| {
            if hand > *cur {
                *cur = hand;
            }
        })
        .or_insert(hand);
}
