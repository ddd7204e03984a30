use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::decision::domain::observation_source::ObservationSource;
use crate::shared::observation::Observation;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read observation stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed observation on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads observations from a JSON-lines stream, one record per line.
///
/// Blank lines are skipped so hand-edited captures replay cleanly.
pub struct JsonlObservationSource<R: Read + Send> {
    reader: BufReader<R>,
    line: usize,
}

impl JsonlObservationSource<File> {
    pub fn open(path: &Path) -> Result<Self, ReplayError> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read + Send> JsonlObservationSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            line: 0,
        }
    }

    fn next_observation(&mut self) -> Option<Result<Observation, ReplayError>> {
        loop {
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(ReplayError::Io(e))),
            }
            self.line += 1;

            let trimmed = buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse {
                line: self.line,
                source,
            }));
        }
    }
}

impl<R: Read + Send> ObservationSource for JsonlObservationSource<R> {
    fn observations(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Observation, Box<dyn std::error::Error>>> + '_> {
        Box::new(std::iter::from_fn(move || {
            self.next_observation()
                .map(|r| r.map_err(|e| Box::new(e) as Box<dyn std::error::Error>))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_from(content: &str) -> JsonlObservationSource<&[u8]> {
        JsonlObservationSource::new(content.as_bytes())
    }

    #[test]
    fn test_parses_one_observation_per_line() {
        let mut source = source_from(
            "{\"face_count\":1,\"head_angle_y\":1.0}\n{\"face_count\":0}\n",
        );
        let observations: Vec<_> = source
            .observations()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].face_count, 1);
        assert_eq!(observations[1].face_count, 0);
    }

    #[test]
    fn test_skips_blank_lines() {
        let mut source = source_from("{\"face_count\":1}\n\n   \n{\"face_count\":0}\n");
        let observations: Vec<_> = source
            .observations()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn test_reports_line_number_on_malformed_input() {
        let mut source = source_from("{\"face_count\":1}\nnot json\n");
        let obs = source.next_observation().unwrap().unwrap();
        assert_eq!(obs.face_count, 1);

        let err = source.next_observation().unwrap().unwrap_err();
        match err {
            ReplayError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let mut source = source_from("{\"face_count\":1}\n");
        let obs = source.next_observation().unwrap().unwrap();
        assert!(obs.smile_probability.is_none());
        assert_eq!(obs.head_angle_x, 0.0);
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        let mut source = source_from("");
        assert_eq!(source.observations().count(), 0);
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"face_count\":1,\"smile_probability\":0.1}}").unwrap();

        let mut source = JsonlObservationSource::open(file.path()).unwrap();
        let obs = source.next_observation().unwrap().unwrap();
        assert_eq!(obs.smile_probability, Some(0.1));
        assert!(source.next_observation().is_none());
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let err = JsonlObservationSource::open(Path::new("/nonexistent/capture.jsonl"))
            .err()
            .unwrap();
        assert!(matches!(err, ReplayError::Io(_)));
    }
}
