use indexmap::IndexMap;
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct MistakeLog {
    counts: IndexMap<String, u32>,
}

impl MistakeLog {
    pub fn record(&mut self, word: &str) {
        let count = self.counts.entry(word.to_string()).or_insert(0);
        *count += 1;
        debug!("[Quiz] {:?} missed, {} wrong so far", word, count);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn words(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_initializes_then_increments() {
        let mut log = MistakeLog::default();
        log.record("ephemeral");
        log.record("opaque");
        log.record("ephemeral");

        let counts: Vec<(&str, u32)> = log.iter().collect();
        assert_eq!(counts, [("ephemeral", 2), ("opaque", 1)]);
        assert_eq!(log.words(), ["ephemeral", "opaque"]);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }
}
