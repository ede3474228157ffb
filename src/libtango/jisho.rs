use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot read vocabulary file: {0}")]
    Read(#[from] io::Error),
    #[error("malformed vocabulary file: {0}")]
    Csv(#[from] csv::Error),
    #[error("vocabulary file has no `{0}` column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
}

impl VocabRecord {
    pub fn eligible(&self) -> Option<(&str, &str)> {
        let word = self.word.as_deref().map(str::trim).filter(|w| !w.is_empty())?;
        let meaning = self
            .meaning
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())?;
        Some((word, meaning))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Jisho {
    entries: IndexMap<String, String>,
}

impl Jisho {
    pub fn from_records(records: &[VocabRecord]) -> Jisho {
        let mut entries = IndexMap::new();
        for record in records {
            if let Some((word, meaning)) = record.eligible() {
                if let Some(previous) = entries.insert(word.to_string(), meaning.to_string()) {
                    debug!(
                        "[Data] Duplicate word {:?}: {:?} replaces {:?}",
                        word, meaning, previous
                    );
                }
            }
        }
        Jisho { entries }
    }

    pub fn meaning(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, m)| (w.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<VocabRecord>,
    pub jisho: Jisho,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Dataset, DataSourceError> {
        info!("[Data] Reading vocabulary from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader(source: impl io::Read) -> Result<Dataset, DataSourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?;
        for required in ["word", "meaning"] {
            if !headers.iter().any(|h| h == required) {
                return Err(DataSourceError::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: VocabRecord = record?;
            records.push(record);
        }

        let jisho = Jisho::from_records(&records);
        debug!(
            "[Data] {} rows read, {} eligible entries",
            records.len(),
            jisho.len()
        );
        Ok(Dataset { records, jisho })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
word,meaning,notes
abate,reduce,verb
zeal,enthusiasm,
,orphaned meaning,
blank,,
  ,   ,
terse,concise,adj
abate,lessen,verb
";

    #[test]
    fn keeps_raw_rows_and_filters_dictionary() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.records.len(), 7);
        assert_eq!(dataset.jisho.len(), 3);
        assert!(dataset.jisho.contains("zeal"));
        assert!(dataset.jisho.contains("terse"));
        assert!(!dataset.jisho.contains("blank"));
    }

    #[test]
    fn duplicate_word_keeps_the_later_meaning() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.jisho.meaning("abate"), Some("lessen"));
    }

    #[test]
    fn dictionary_order_follows_the_file() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let words: Vec<&str> = dataset.jisho.words().collect();
        assert_eq!(words, ["abate", "zeal", "terse"]);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let result = Dataset::from_reader("word,definition\nabate,reduce\n".as_bytes());
        assert!(matches!(
            result,
            Err(DataSourceError::MissingColumn("meaning"))
        ));
    }

    #[test]
    fn loads_from_a_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.jisho.len(), 3);
    }
}
