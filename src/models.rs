use serde::{Deserialize, Deserializer};

/// Body of `POST /questions`. The route multiplexes search and create for
/// backward compatibility; `into_request` decides which one a body is.
#[derive(Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

pub enum QuestionRequest {
    Search(String),
    Create(NewQuestion),
}

pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl QuestionsPostBody {
    /// A body carrying `searchTerm` is a search; anything else must carry
    /// all four question fields to be a create.
    pub fn into_request(self) -> Option<QuestionRequest> {
        if let Some(term) = self.search_term {
            return Some(QuestionRequest::Search(term));
        }

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                Some(QuestionRequest::Create(NewQuestion {
                    question,
                    answer,
                    difficulty,
                    category,
                }))
            }
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub struct QuizBody {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub id: i64,
}

/// Deserialize a value that may be either a JSON number or a string
/// containing a number. Quiz frontends send the category id both ways.
fn deserialize_string_or_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(v as i64)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}
