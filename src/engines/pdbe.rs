//! PDBe (Protein Data Bank in Europe) engine
//!
//! Searches macromolecular structure entries through the PDBe Solr API
//! (<https://www.ebi.ac.uk/pdbe/api/doc/search.html>). Entries are filtered by
//! publication status: unpublished entries are hidden, obsolete entries are
//! annotated with their successor, and released entries get a citation line
//! and a structure preview image.

use super::traits::*;
use crate::config::EngineConfig;
use crate::locales::{self, Translations};
use crate::network::{accept_json, accept_language, searx_useragent};
use crate::results::Result;
use anyhow::Result as AnyhowResult;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Solr select endpoint
pub const PDBE_SOLR_URL: &str = "https://www.ebi.ac.uk/pdbe/search/pdb/select?";

/// Entry page, `{pdb_id}` is substituted
pub const PDBE_ENTRY_URL: &str = "https://www.ebi.ac.uk/pdbe/entry/pdb/{pdb_id}";

/// Structure preview image, `{pdb_id}` is substituted
pub const PDBE_PREVIEW_URL: &str =
    "https://www.ebi.ac.uk/pdbe/static/entry/{pdb_id}_deposited_chain_front_image-200x200.png";

/// Status codes of entries that are not publicly released yet
pub const UNPUBLISHED_STATUSES: &[&str] = &[
    "HPUB", "HOLD", "PROC", "WAIT", "AUTH", "AUCO", "REPL", "POLC", "REFI", "TRSF", "WDRN",
];

/// Status code of obsolete entries
pub const OBSOLETE_STATUS: &str = "OBS";

/// Status code of released entries
pub const RELEASED_STATUS: &str = "REL";

/// Errors that fail a whole PDBe response
#[derive(Debug, Error)]
pub enum PdbeError {
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse PDBe response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: String, value: String },
}

/// What to do with records whose status code is not recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownStatusPolicy {
    /// Format them like released entries
    #[default]
    Include,
    /// Drop them
    Skip,
}

impl FromStr for UnknownStatusPolicy {
    type Err = PdbeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "include" => Ok(Self::Include),
            "skip" => Ok(Self::Skip),
            _ => Err(PdbeError::InvalidSetting {
                key: "unknown_status".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Status filtering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdbeOptions {
    pub hide_obsolete: bool,
    pub hide_unpublished: bool,
    pub unknown_status: UnknownStatusPolicy,
}

impl Default for PdbeOptions {
    fn default() -> Self {
        Self {
            hide_obsolete: false,
            hide_unpublished: true,
            unknown_status: UnknownStatusPolicy::Include,
        }
    }
}

impl PdbeOptions {
    /// Read options from the engine-specific keys of an engine config,
    /// keeping defaults for keys that are absent
    pub fn from_config(config: &EngineConfig) -> std::result::Result<Self, PdbeError> {
        let mut options = Self::default();

        if let Some(hide) = config.extra_bool("hide_obsolete") {
            options.hide_obsolete = hide;
        }
        if let Some(hide) = config.extra_bool("hide_unpublished") {
            options.hide_unpublished = hide;
        }
        if let Some(policy) = config.extra_str("unknown_status") {
            options.unknown_status = policy.parse()?;
        }

        Ok(options)
    }
}

/// Publication status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus<'a> {
    Released,
    Obsolete,
    Unpublished,
    Unknown(&'a str),
}

impl<'a> EntryStatus<'a> {
    /// Classify a status code; unpublished codes take precedence
    pub fn classify(code: &'a str) -> Self {
        if UNPUBLISHED_STATUSES.contains(&code) {
            Self::Unpublished
        } else if code == OBSOLETE_STATUS {
            Self::Obsolete
        } else if code == RELEASED_STATUS {
            Self::Released
        } else {
            Self::Unknown(code)
        }
    }
}

#[derive(Debug, Deserialize)]
struct SolrResponse {
    response: SolrDocs,
}

#[derive(Debug, Deserialize)]
struct SolrDocs {
    docs: Vec<PdbEntry>,
}

/// A raw PDBe record. Field presence varies with the entry status, so every
/// accessor is best-effort.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PdbEntry(Map<String, Value>);

impl PdbEntry {
    /// Scalar field rendered as text; Solr sends years as numbers
    pub fn text(&self, key: &str) -> Option<String> {
        scalar_text(self.0.get(key)?)
    }

    pub fn pdb_id(&self) -> Option<String> {
        self.text("pdb_id")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    /// First entry of the author list
    pub fn first_author(&self) -> Option<String> {
        match self.0.get("entry_author_list")? {
            Value::Array(authors) => authors.first().and_then(scalar_text),
            other => scalar_text(other),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Entry page URL for a PDB id
pub fn entry_url(pdb_id: &str) -> String {
    PDBE_ENTRY_URL.replace("{pdb_id}", pdb_id)
}

/// Preview image URL for a PDB id
pub fn preview_url(pdb_id: &str) -> String {
    PDBE_PREVIEW_URL.replace("{pdb_id}", pdb_id)
}

/// PDBe search engine
pub struct Pdbe {
    api_url: String,
    user_agent: String,
    locale: String,
    options: PdbeOptions,
    translations: Translations,
}

impl Pdbe {
    pub fn new() -> Self {
        Self {
            api_url: PDBE_SOLR_URL.to_string(),
            user_agent: searx_useragent(None),
            locale: locales::FALLBACK_LANGUAGE.to_string(),
            options: PdbeOptions::default(),
            translations: Translations::new(),
        }
    }

    /// Point the engine at another Solr endpoint (mirrors, tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Default language of the obsolete-entry annotations
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.set_locale(&locale.into());
        self
    }

    pub fn with_options(mut self, options: PdbeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PdbeOptions {
        &self.options
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn set_locale(&mut self, locale: &str) {
        if locales::is_supported(locale) {
            self.locale = locales::base_language(locale).to_string();
        } else {
            warn!(
                "Unsupported locale {} for pdbe, using {}",
                locale,
                locales::FALLBACK_LANGUAGE
            );
            self.locale = locales::FALLBACK_LANGUAGE.to_string();
        }
    }

    /// Language for a request: the requested one when supported, else the
    /// engine's locale
    pub fn locale_for<'a>(&'a self, params: &'a RequestParams) -> &'a str {
        match params.lang.as_deref() {
            Some(lang) if locales::is_supported(lang) => locales::base_language(lang),
            _ => self.locale.as_str(),
        }
    }

    /// Parse a Solr response body into results, annotating in `lang`
    pub fn parse_body(&self, body: &str, lang: &str) -> std::result::Result<Vec<Result>, PdbeError> {
        let solr: SolrResponse = serde_json::from_str(body)?;
        Ok(self.parse_docs(&solr.response.docs, lang))
    }

    /// Normalize records in order, dropping the ones hidden by status
    pub fn parse_docs(&self, entries: &[PdbEntry], lang: &str) -> Vec<Result> {
        let mut results = Vec::new();
        let mut position = 1u32;

        for entry in entries {
            if let Some(result) = self.normalize(entry, lang) {
                results.push(result.with_position(position));
                position += 1;
            }
        }

        results
    }

    fn normalize(&self, entry: &PdbEntry, lang: &str) -> Option<Result> {
        let Some(pdb_id) = entry.pdb_id() else {
            debug!("Skipping PDBe record without pdb_id");
            return None;
        };

        let status = entry.status().unwrap_or_default();

        match EntryStatus::classify(&status) {
            EntryStatus::Unpublished if self.options.hide_unpublished => None,
            EntryStatus::Obsolete if self.options.hide_obsolete => None,
            EntryStatus::Obsolete => Some(self.obsolete_result(&pdb_id, entry, lang)),
            EntryStatus::Unknown(code) => {
                debug!("PDBe entry {} has unknown status {:?}", pdb_id, code);
                match self.options.unknown_status {
                    UnknownStatusPolicy::Include => Some(self.released_result(&pdb_id, entry)),
                    UnknownStatusPolicy::Skip => None,
                }
            }
            EntryStatus::Released | EntryStatus::Unpublished => {
                Some(self.released_result(&pdb_id, entry))
            }
        }
    }

    fn obsolete_result(&self, pdb_id: &str, entry: &PdbEntry, lang: &str) -> Result {
        // The template carries `&nbsp;` markup, so the title goes in escaped
        let original_title = escape_html(&entry.text("title").unwrap_or_default());
        let title = self.translations.format(
            lang,
            "pdbe_obsolete_title",
            &[("title", original_title.as_str())],
        );

        let mut result = Result::new(entry_url(pdb_id), title, self.name().to_string());

        // Obsolete entries have no preview image
        if let Some(successor) = entry.text("superseded_by") {
            let message = self
                .translations
                .format(lang, "pdbe_superseded_by", &[]);
            result = result.with_content(format!(
                r#"<span class="glyphicon glyphicon-exclamation-sign"></span>&nbsp;<em>{} <a href="{}">{}</a></em>"#,
                message,
                escape_html(&entry_url(&successor)),
                escape_html(&successor)
            ));
        }

        result
    }

    /// Result for a released (or unpublished-but-shown, or unknown) entry.
    ///
    /// The preview image is only attached together with a complete citation.
    /// searx's Python engine instead recomputes the image from `pdb_id` when
    /// the citation lookup fails, so such entries keep their preview there.
    fn released_result(&self, pdb_id: &str, entry: &PdbEntry) -> Result {
        let title = entry.text("title").unwrap_or_default();
        let mut result = Result::new(entry_url(pdb_id), title, self.name().to_string());

        // Without a complete citation the preview is dropped too
        if let Some(content) = Self::citation(entry) {
            result = result
                .with_content(content)
                .with_img_src(preview_url(pdb_id));
        }

        result
    }

    /// Citation line, or None when a field it needs is missing
    fn citation(entry: &PdbEntry) -> Option<String> {
        let title = entry.text("citation_title")?;
        let author = entry.first_author()?;

        let (journal, volume, page, year) =
            match entry.text("journal").filter(|j| !j.is_empty()) {
                Some(journal) => (
                    journal,
                    entry.text("journal_volume")?,
                    entry.text("journal_page")?,
                    entry.text("citation_year")?,
                ),
                None => (
                    String::new(),
                    String::new(),
                    String::new(),
                    entry.text("release_year")?,
                ),
            };

        Some(format!(
            concat!(
                r#"{}&nbsp;<span class="glyphicon glyphicon-user"></span>&nbsp;{}&nbsp; "#,
                r#"<span class="glyphicon glyphicon-book"></span>&nbsp;{}&nbsp;<strong>{}</strong>&nbsp;{} "#,
                r#"<span class="glyphicon glyphicon-calendar"></span>&nbsp; {}"#
            ),
            escape_html(&title),
            escape_html(&author),
            escape_html(&journal),
            escape_html(&volume),
            escape_html(&page),
            escape_html(&year)
        ))
    }
}

impl Default for Pdbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Pdbe {
    fn name(&self) -> &str {
        "pdbe"
    }

    fn request(&self, params: &RequestParams) -> AnyhowResult<EngineRequest> {
        let mut data = HashMap::new();
        data.insert("q".to_string(), params.query.clone());
        // Ask Solr for a parsable format
        data.insert("wt".to_string(), "json".to_string());

        Ok(EngineRequest::post(&self.api_url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_json())
            .header("Accept-Language", accept_language(self.locale_for(params)))
            .form(data))
    }

    fn response(
        &self,
        response: EngineResponse,
        params: &RequestParams,
    ) -> AnyhowResult<EngineResults> {
        if !response.is_success() {
            return Err(PdbeError::HttpStatus(response.status).into());
        }

        let results = self.parse_body(&response.text, self.locale_for(params))?;

        Ok(EngineResults::with_results(results))
    }

    fn init(&mut self, config: &EngineConfig) -> AnyhowResult<()> {
        self.options = PdbeOptions::from_config(config)?;

        if let Some(locale) = config.extra_str("locale") {
            self.set_locale(locale);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(docs: Value) -> String {
        json!({ "response": { "numFound": 0, "docs": docs } }).to_string()
    }

    fn parse(engine: &Pdbe, docs: Value) -> Vec<Result> {
        engine.parse_body(&body(docs), engine.locale()).unwrap()
    }

    fn released() -> Value {
        json!({
            "status": "REL",
            "pdb_id": "1ABC",
            "title": "T",
            "citation_title": "T",
            "entry_author_list": ["A", "B"],
            "journal": "J",
            "journal_volume": "1",
            "journal_page": "10",
            "citation_year": "2020"
        })
    }

    #[test]
    fn test_pdbe_request() {
        let pdbe = Pdbe::new();
        let request = pdbe.request(&RequestParams::new("hemoglobin")).unwrap();

        assert_eq!(request.url, PDBE_SOLR_URL);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.form_value("q"), Some("hemoglobin"));
        assert_eq!(request.form_value("wt"), Some("json"));
        assert!(request
            .header_value("User-Agent")
            .unwrap()
            .starts_with("searx-pdbe/"));
    }

    #[test]
    fn test_request_forwards_query_verbatim() {
        let pdbe = Pdbe::new().with_user_agent("custom");
        let request = pdbe.request(&RequestParams::new("")).unwrap();
        assert_eq!(request.form_value("q"), Some(""));
        assert_eq!(request.header_value("user-agent"), Some("custom"));

        let request = pdbe
            .request(&RequestParams::new("title:\"kinase\" AND *"))
            .unwrap();
        assert_eq!(request.form_value("q"), Some("title:\"kinase\" AND *"));
    }

    #[test]
    fn test_released_entry() {
        let results = parse(&Pdbe::new(), json!([released()]));
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.url, "https://www.ebi.ac.uk/pdbe/entry/pdb/1ABC");
        assert_eq!(result.title, "T");
        assert_eq!(
            result.img_src(),
            Some("https://www.ebi.ac.uk/pdbe/static/entry/1ABC_deposited_chain_front_image-200x200.png")
        );

        let content = result.content.as_deref().unwrap();
        for part in ["T", ">&nbsp;A&nbsp;", "J", "<strong>1</strong>", "10", "2020"] {
            assert!(content.contains(part), "missing {part} in {content}");
        }
        assert!(!content.contains("B"));
        assert_eq!(result.engine, "pdbe");
        assert_eq!(result.positions, vec![1]);
    }

    #[test]
    fn test_citation_parts_in_order() {
        let results = parse(&Pdbe::new(), json!([released()]));
        let content = results[0].content.as_deref().unwrap();

        let offsets: Vec<usize> = ["glyphicon-user", "&nbsp;J&nbsp;", "<strong>1</strong>", "10 ", "2020"]
            .iter()
            .map(|p| content.find(p).unwrap())
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{content}");
    }

    #[test]
    fn test_entry_without_journal_uses_release_year() {
        let results = parse(
            &Pdbe::new(),
            json!([{
                "status": "REL",
                "pdb_id": "2DEF",
                "title": "To be published",
                "citation_title": "To be published",
                "entry_author_list": ["Smith, J."],
                "journal": "",
                "release_year": 2019
            }]),
        );

        let content = results[0].content.as_deref().unwrap();
        assert!(content.contains("2019"));
        assert!(content.contains("<strong></strong>"));
        assert!(results[0].img_src().is_some());
    }

    #[test]
    fn test_absent_journal_uses_release_year() {
        let results = parse(
            &Pdbe::new(),
            json!([{
                "status": "REL",
                "pdb_id": "2DEF",
                "title": "T",
                "citation_title": "T",
                "entry_author_list": ["A"],
                "journal_volume": "99",
                "release_year": "2018"
            }]),
        );

        let content = results[0].content.as_deref().unwrap();
        assert!(content.contains("2018"));
        assert!(!content.contains("99"));
    }

    #[test]
    fn test_numeric_fields_render() {
        let mut entry = released();
        entry["citation_year"] = json!(2021);
        entry["journal_volume"] = json!(7);

        let results = parse(&Pdbe::new(), json!([entry]));
        let content = results[0].content.as_deref().unwrap();
        assert!(content.contains("2021"));
        assert!(content.contains("<strong>7</strong>"));
    }

    #[test]
    fn test_missing_citation_field_drops_content_and_image() {
        for field in ["citation_title", "entry_author_list", "journal_page", "citation_year"] {
            let mut entry = released();
            entry.as_object_mut().unwrap().remove(field);

            let results = parse(&Pdbe::new(), json!([entry]));
            assert_eq!(results.len(), 1, "{field}");
            assert_eq!(results[0].title, "T");
            assert_eq!(results[0].url, entry_url("1ABC"));
            assert!(results[0].content.is_none(), "{field}");
            assert!(results[0].img_src().is_none(), "{field}");
        }
    }

    #[test]
    fn test_empty_author_list_drops_content() {
        let mut entry = released();
        entry["entry_author_list"] = json!([]);

        let results = parse(&Pdbe::new(), json!([entry]));
        assert!(results[0].content.is_none());
    }

    #[test]
    fn test_citation_values_are_escaped() {
        let mut entry = released();
        entry["citation_title"] = json!("<b>Cu & Zn</b>");

        let results = parse(&Pdbe::new(), json!([entry]));
        let content = results[0].content.as_deref().unwrap();
        assert!(content.contains("&lt;b&gt;Cu &amp; Zn&lt;/b&gt;"));
    }

    #[test]
    fn test_unpublished_entries_are_hidden() {
        let docs: Vec<Value> = UNPUBLISHED_STATUSES
            .iter()
            .map(|status| json!({ "status": status, "pdb_id": "9ZZZ", "title": "T" }))
            .collect();

        assert!(parse(&Pdbe::new(), Value::Array(docs)).is_empty());
    }

    #[test]
    fn test_withdrawn_entry() {
        let results = parse(
            &Pdbe::new(),
            json!([{ "status": "WDRN", "pdb_id": "3GHI", "title": "T" }]),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_unpublished_shown_when_not_hidden() {
        let pdbe = Pdbe::new().with_options(PdbeOptions {
            hide_unpublished: false,
            ..Default::default()
        });
        let results = parse(&pdbe, json!([{ "status": "HPUB", "pdb_id": "4JKL", "title": "T" }]));

        assert_eq!(results.len(), 1);
        assert!(results[0].content.is_none());
    }

    #[test]
    fn test_obsolete_entry() {
        let results = parse(
            &Pdbe::new(),
            json!([{ "status": "OBS", "pdb_id": "1XYZ", "superseded_by": "2XYZ", "title": "T" }]),
        );
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.url, entry_url("1XYZ"));
        assert!(result.title.ends_with("(OBSOLETE)"));
        assert!(result.title.starts_with("T"));
        assert!(result.img_src().is_none());

        let content = result.content.as_deref().unwrap();
        assert!(content.contains("This entry has been superseded by"));
        assert!(content.contains(r#"href="https://www.ebi.ac.uk/pdbe/entry/pdb/2XYZ""#));
        assert!(content.contains(">2XYZ</a>"));
    }

    #[test]
    fn test_obsolete_title_is_escaped() {
        let results = parse(
            &Pdbe::new(),
            json!([{ "status": "OBS", "pdb_id": "1XYZ", "title": "Cu<II> & Zn" }]),
        );
        assert_eq!(results[0].title, "Cu&lt;II&gt; &amp; Zn&nbsp;(OBSOLETE)");
    }

    #[test]
    fn test_obsolete_entry_hidden() {
        let pdbe = Pdbe::new().with_options(PdbeOptions {
            hide_obsolete: true,
            ..Default::default()
        });
        let results = parse(
            &pdbe,
            json!([{ "status": "OBS", "pdb_id": "1XYZ", "superseded_by": "2XYZ", "title": "T" }]),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_obsolete_without_successor() {
        let results = parse(
            &Pdbe::new(),
            json!([{ "status": "OBS", "pdb_id": "1XYZ", "title": "T" }]),
        );
        assert!(results[0].title.ends_with("(OBSOLETE)"));
        assert!(results[0].content.is_none());
    }

    #[test]
    fn test_obsolete_localized() {
        let pdbe = Pdbe::new().with_locale("de-DE");
        let results = parse(
            &pdbe,
            json!([{ "status": "OBS", "pdb_id": "1XYZ", "superseded_by": "2XYZ", "title": "T" }]),
        );
        assert_eq!(results[0].title, "T&nbsp;(VERALTET)");
        assert!(results[0]
            .content
            .as_deref()
            .unwrap()
            .contains("Dieser Eintrag wurde ersetzt durch"));
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        assert_eq!(Pdbe::new().with_locale("ja").locale(), "en");
        assert_eq!(Pdbe::new().with_locale("fr-CA").locale(), "fr");
    }

    #[test]
    fn test_unknown_status_policy() {
        let docs = json!([
            { "status": "XXXX", "pdb_id": "5MNO", "title": "Odd" },
            { "pdb_id": "6PQR", "title": "No status" }
        ]);

        let included = parse(&Pdbe::new(), docs.clone());
        assert_eq!(included.len(), 2);
        assert!(included.iter().all(|r| r.content.is_none()));

        let pdbe = Pdbe::new().with_options(PdbeOptions {
            unknown_status: UnknownStatusPolicy::Skip,
            ..Default::default()
        });
        assert!(parse(&pdbe, docs).is_empty());
    }

    #[test]
    fn test_order_preserved_and_count_bounded() {
        let mut second = released();
        second["pdb_id"] = json!("7STU");
        let docs = json!([
            released(),
            { "status": "PROC", "pdb_id": "0AAA", "title": "hidden" },
            { "status": "OBS", "pdb_id": "1XYZ", "superseded_by": "2XYZ", "title": "old" },
            second
        ]);

        let results = parse(&Pdbe::new(), docs);
        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![entry_url("1ABC"), entry_url("1XYZ"), entry_url("7STU")]
        );
        let positions: Vec<u32> = results.iter().map(|r| r.positions[0]).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_record_without_pdb_id_is_skipped() {
        let mut entry = released();
        entry.as_object_mut().unwrap().remove("pdb_id");
        assert!(parse(&Pdbe::new(), json!([entry])).is_empty());
    }

    #[test]
    fn test_empty_docs() {
        assert!(parse(&Pdbe::new(), json!([])).is_empty());
    }

    #[test]
    fn test_malformed_body_fails() {
        let pdbe = Pdbe::new();
        assert!(matches!(pdbe.parse_body("<html>", "en"), Err(PdbeError::Parse(_))));
        assert!(pdbe.parse_body(r#"{"docs": []}"#, "en").is_err());
        assert!(pdbe.parse_body(r#"{"response": {}}"#, "en").is_err());
        assert!(pdbe.parse_body(r#"{"response": {"docs": [1]}}"#, "en").is_err());
    }

    #[test]
    fn test_response_http_error() {
        let mut response = EngineResponse::ok(body(json!([])));
        response.status = 500;

        let err = Pdbe::new()
            .response(response, &RequestParams::new("x"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PdbeError>(),
            Some(PdbeError::HttpStatus(500))
        ));
    }

    #[test]
    fn test_response() {
        let response = EngineResponse::ok(body(json!([released()])));
        let results = Pdbe::new()
            .response(response, &RequestParams::new("x"))
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_request_accept_language() {
        let pdbe = Pdbe::new().with_locale("fr");

        let request = pdbe.request(&RequestParams::new("x")).unwrap();
        assert!(request.header_value("Accept-Language").unwrap().starts_with("fr,"));

        let request = pdbe
            .request(&RequestParams::new("x").with_lang("de-AT"))
            .unwrap();
        assert!(request.header_value("accept-language").unwrap().starts_with("de,"));

        let request = pdbe.request(&RequestParams::new("x").with_lang("ja")).unwrap();
        assert!(request.header_value("Accept-Language").unwrap().starts_with("fr,"));
    }

    #[test]
    fn test_response_uses_requested_lang() {
        let docs = json!([{ "status": "OBS", "pdb_id": "1XYZ", "superseded_by": "2XYZ", "title": "T" }]);
        let pdbe = Pdbe::new();

        let response = EngineResponse::ok(body(docs.clone()));
        let results = pdbe
            .response(response, &RequestParams::new("x").with_lang("de"))
            .unwrap();
        assert_eq!(results.results[0].title, "T&nbsp;(VERALTET)");

        let response = EngineResponse::ok(body(docs));
        let results = pdbe
            .response(response, &RequestParams::new("x").with_lang("ja"))
            .unwrap();
        assert_eq!(results.results[0].title, "T&nbsp;(OBSOLETE)");
    }

    #[test]
    fn test_init_from_config() {
        let mut config = EngineConfig {
            name: "pdbe".to_string(),
            engine: "pdbe".to_string(),
            ..Default::default()
        };
        config
            .extra
            .insert("hide_obsolete".to_string(), serde_yaml::Value::Bool(true));
        config.extra.insert(
            "unknown_status".to_string(),
            serde_yaml::Value::String("Skip".to_string()),
        );
        config
            .extra
            .insert("locale".to_string(), serde_yaml::Value::String("fr".to_string()));

        let mut pdbe = Pdbe::new();
        pdbe.init(&config).unwrap();

        assert!(pdbe.options().hide_obsolete);
        assert!(pdbe.options().hide_unpublished);
        assert_eq!(pdbe.options().unknown_status, UnknownStatusPolicy::Skip);
        assert_eq!(pdbe.locale(), "fr");
    }

    #[test]
    fn test_init_rejects_bad_policy() {
        let mut config = EngineConfig::default();
        config.extra.insert(
            "unknown_status".to_string(),
            serde_yaml::Value::String("maybe".to_string()),
        );
        assert!(Pdbe::new().init(&config).is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(EntryStatus::classify("REL"), EntryStatus::Released);
        assert_eq!(EntryStatus::classify("OBS"), EntryStatus::Obsolete);
        assert_eq!(EntryStatus::classify("AUCO"), EntryStatus::Unpublished);
        assert_eq!(EntryStatus::classify("obs"), EntryStatus::Unknown("obs"));
    }
}
