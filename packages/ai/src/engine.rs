//! Dataset question engine.
//!
//! The Rust rendition of the source app's dataframe query engine: the
//! model is shown the dataset's schema and a small head sample, then the
//! user's question is forwarded verbatim. The textual result is exposed
//! verbatim; a failure becomes a literal `Error: <message>` answer string
//! and never affects subsequent questions.

use accident_map_dataset::RecordCollection;

use crate::AiError;
use crate::providers::LlmProvider;

/// How many records of the collection to show the model as a head sample.
const HEAD_SAMPLE_ROWS: usize = 5;

/// Answers free-text questions against the full record collection.
pub struct QuestionEngine {
    provider: Box<dyn LlmProvider>,
}

impl QuestionEngine {
    /// Creates a question engine backed by the given provider.
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Creates a question engine with the provider selected from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Config`] if no provider credentials are found.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(crate::providers::create_provider_from_env()?))
    }

    /// Answers a question about the dataset.
    ///
    /// The question is passed to the provider verbatim and the provider's
    /// text is returned verbatim. Any failure is caught at this boundary
    /// and surfaced as the answer string `Error: <message>`; it has no
    /// effect on later questions or on the map/table path.
    pub async fn ask(&self, collection: &RecordCollection, question: &str) -> String {
        let system_prompt = build_system_prompt(collection);

        match self.provider.chat(&system_prompt, question).await {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("Question answering failed: {e}");
                format!("Error: {e}")
            }
        }
    }
}

/// Builds the system prompt describing the dataset: column names, record
/// count, and a head sample, mirroring what the source app's dataframe
/// engine shows the model.
fn build_system_prompt(collection: &RecordCollection) -> String {
    let mut columns: Vec<&str> = vec![
        "Datum",
        "Breitengrad",
        "Längengrad",
        "Unfalltyp",
        "Unfallschwere",
        "Jahr",
        "Monat",
        "Wochentag",
        "Stunde",
    ];
    columns.extend(collection.party_columns().iter().map(String::as_str));

    let head: String = collection
        .records()
        .iter()
        .take(HEAD_SAMPLE_ROWS)
        .map(|record| {
            let mut cells = vec![
                record.date.to_string(),
                record.latitude.to_string(),
                record.longitude.to_string(),
                record
                    .accident_type
                    .map_or_else(String::new, |t| t.to_string()),
                record.severity.map_or_else(String::new, |s| s.to_string()),
                record.year.to_string(),
                record.month.clone(),
                record.weekday.to_string(),
                record.hour.to_string(),
            ];
            for name in collection.party_columns() {
                cells.push(record.parties.get(name).copied().unwrap_or(false).to_string());
            }
            cells.join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are answering questions about a dataset of road accident \
         records for the city of St. Gallen, Switzerland.\n\
         Columns: {columns}\n\
         Total records: {count}\n\
         First rows:\n{head}\n\n\
         Answer the user's question about this dataset concisely, in the \
         language of the question. Do not invent values that are not \
         supported by the schema above.",
        columns = columns.join(", "),
        count = collection.len(),
    )
}
