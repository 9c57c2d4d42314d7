use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::db::Question;

/// Pick a random question from `pool` that has not been served yet, or
/// `None` when the quiz is over.
///
/// Completion is a count comparison: once as many questions have been
/// served as the pool holds, the quiz ends, even if some served ids never
/// belonged to this pool. The pick is uniform over the eligible questions
/// and draws from the calling thread's rng, so concurrent requests share no
/// rng state.
pub fn next_question<'a>(pool: &'a [Question], asked: &[i64]) -> Option<&'a Question> {
    if pool.len() == asked.len() {
        return None;
    }

    let asked: HashSet<i64> = asked.iter().copied().collect();
    let eligible: Vec<&Question> = pool.iter().filter(|q| !asked.contains(&q.id)).collect();

    eligible.choose(&mut rand::thread_rng()).copied()
}
