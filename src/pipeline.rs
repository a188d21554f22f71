use std::collections::BTreeMap;

use tracing::debug;

use crate::aggregate::{Absorbed, FaqDataset};
use crate::config::Settings;
use crate::error::Result;
use crate::parser::{self, ParseOutcome};
use crate::walker;
use crate::writer;

/// What a run saw. Kept for tests and debug logs only.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_seen: usize,
    pub parsed: usize,
    pub skipped: BTreeMap<&'static str, usize>,
    pub unknown_category: usize,
    pub entries: usize,
}

/// Walk the docs tree and collect every FAQ entry, without writing anything.
pub fn collect(settings: &Settings) -> Result<(FaqDataset, RunSummary)> {
    let mut data = FaqDataset::default();
    let mut summary = RunSummary::default();

    for path in walker::markdown_files(&settings.docs_dir) {
        summary.files_seen += 1;

        match parser::parse_document(&path)? {
            ParseOutcome::Skip(reason) => {
                debug!(path = %path.display(), %reason, "skipped");
                *summary.skipped.entry(reason.label()).or_default() += 1;
            }
            ParseOutcome::Parsed { category, items } => {
                summary.parsed += 1;
                match data.absorb(&path, &category, items) {
                    Absorbed::Added { category, entries } => {
                        debug!(path = %path.display(), ?category, entries, "absorbed");
                        summary.entries += entries;
                    }
                    Absorbed::UnknownCategory => {
                        debug!(path = %path.display(), %category, "unknown category");
                        summary.unknown_category += 1;
                    }
                }
            }
        }
    }

    Ok((data, summary))
}

/// Single pass: collect, then write the dataset to `settings.output_file`.
pub fn run(settings: &Settings) -> Result<RunSummary> {
    let (data, summary) = collect(settings)?;
    writer::write_dataset(&data, &settings.output_file)?;
    debug!(
        files = summary.files_seen,
        parsed = summary.parsed,
        skipped = ?summary.skipped,
        unknown_category = summary.unknown_category,
        entries = summary.entries,
        "run finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Lang;
    use crate::error::FaqError;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn fixture_settings(out: &Path) -> Settings {
        Settings {
            docs_dir: PathBuf::from("tests/fixtures/docs"),
            output_file: out.to_path_buf(),
        }
    }

    #[test]
    fn fixtures_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = fixture_settings(&tmp.path().join("site/faq.json"));

        let summary = run(&settings).unwrap();
        assert_eq!(summary.files_seen, 7);
        assert_eq!(summary.parsed, 5);
        assert_eq!(summary.skipped.get("no_frontmatter"), Some(&1));
        assert_eq!(summary.skipped.get("missing_category"), Some(&1));
        assert_eq!(summary.unknown_category, 1);
        assert_eq!(summary.entries, 5);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&settings.output_file).unwrap()).unwrap();

        // Walk order: billing.md, en/, guides/, uk/
        assert_eq!(
            json["billing"],
            serde_json::json!([
                {"question": {"en": "Why was I charged twice?"}, "answer": {"en": "Contact support."}},
                {"question": {"ua": "Чому з мене списали кошти двічі?"}, "answer": {"ua": "Зверніться до служби підтримки."}}
            ])
        );
        assert_eq!(
            json["templates"],
            serde_json::json!([
                {
                    "question": {"en": "Can I edit a template after publishing?"},
                    "answer": {"en": "Yes. Open the template and press **Edit**.\n\nChanges go live immediately."}
                },
                {
                    "question": {"en": "Template FAQ"},
                    "answer": {"en": "Everything else lives in the help center.\n\n#### Is this a question?\nLevel four headers are part of the previous answer."}
                }
            ])
        );
        assert_eq!(
            json["general"],
            serde_json::json!([
                {"question": {"en": "What is this product?"}, "answer": {"en": "A site builder."}}
            ])
        );
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.json");
        let b = tmp.path().join("b.json");
        run(&fixture_settings(&a)).unwrap();
        run(&fixture_settings(&b)).unwrap();
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn missing_docs_dir_writes_empty_dataset() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = Settings {
            docs_dir: tmp.path().join("no-docs"),
            output_file: tmp.path().join("out/faq.json"),
        };
        let summary = run(&settings).unwrap();
        assert_eq!(summary, RunSummary::default());
        let text = fs::read_to_string(&settings.output_file).unwrap();
        assert_eq!(text, "{\n  \"templates\": [],\n  \"billing\": [],\n  \"general\": []\n}");
    }

    #[test]
    fn language_follows_uk_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let docs = tmp.path().join("docs");
        for dir in ["en", "uk"] {
            fs::create_dir_all(docs.join(dir)).unwrap();
            fs::write(
                docs.join(dir).join("general.md"),
                "---\nfaq_category: general\n---\n\n## Same question?\nSame answer.\n",
            )
            .unwrap();
        }
        let settings = Settings {
            docs_dir: docs,
            output_file: tmp.path().join("faq.json"),
        };

        let (data, _) = collect(&settings).unwrap();
        assert_eq!(data.general.len(), 2);
        assert_eq!(data.general[0].question.keys().collect::<Vec<_>>(), vec![&Lang::En]);
        assert_eq!(data.general[1].question.keys().collect::<Vec<_>>(), vec![&Lang::Ua]);
    }

    #[test]
    fn invalid_utf8_aborts_the_run() {
        let tmp = tempfile::tempdir().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        let settings = Settings {
            docs_dir: docs,
            output_file: tmp.path().join("faq.json"),
        };

        let err = run(&settings).unwrap_err();
        assert!(matches!(err, FaqError::Read { .. }));
        assert!(!settings.output_file.exists());
    }
}
