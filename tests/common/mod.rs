use trivia_api::db::Db;
use trivia_api::models::NewQuestion;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

/// Insert `count` questions cycling through categories 1..=3 and return
/// their ids in insertion order.
pub async fn seed_questions(db: &Db, count: usize) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..count {
        let new = NewQuestion {
            question: format!("Sample question {}", i + 1),
            answer: format!("Sample answer {}", i + 1),
            difficulty: (i % 5 + 1) as i64,
            category: (i % 3 + 1) as i64,
        };
        let id = db
            .insert_question(&new)
            .await
            .expect("failed to insert seed question");
        ids.push(id);
    }
    ids
}
