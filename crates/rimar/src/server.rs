//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the rhyme engine, syllable counter, corpus, and style analyzer
//! over stdio so a lyric-writing assistant can call them as tools.
//!
//! Each `#[tool]` method delegates to `rimar_core`; the server only parses
//! parameters, enforces the input size limit, and serializes results. Tools
//! that write to the store persist the snapshot before returning.

use std::sync::Arc;

use camino::Utf8PathBuf;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use rimar_core::config::Config;
use rimar_core::error::CoreError;
use rimar_core::import::ImportMode;
use rimar_core::phonetics::{PhoneticSignature, extract_signature};
use rimar_core::sections::{Section, SectionHint};
use rimar_core::store::{LineFilter, MemoryStore};
use rimar_core::themes::{KeywordThemes, Theme};
use rimar_core::{corpus, import, rhymes, style, syllables};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `find_rhymes` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindRhymesParams {
    /// Bulgarian word to rhyme.
    pub word: String,
    /// Suggestions per tier. Defaults to the configured rhyme limit.
    pub limit: Option<usize>,
    /// Candidate words to classify instead of the stored word pool.
    pub candidates: Option<Vec<String>>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Text to count. Each line is also counted separately.
    pub text: String,
}

/// Parameters for the `phonetic_signature` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PhoneticSignatureParams {
    /// Words to analyze.
    pub words: Vec<String>,
}

/// Parameters for the `analyze_style` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeStyleParams {
    /// Lyrics to analyze.
    pub text: String,
    /// Store the result as style patterns for `user_id`.
    #[serde(default)]
    pub save: bool,
    /// Owner of the stored patterns. Defaults to the configured user.
    pub user_id: Option<String>,
}

/// Parameters for the `style_context` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct StyleContextParams {
    /// User whose style to summarize. Defaults to the configured user.
    pub user_id: Option<String>,
}

/// Parameters for the `ingest_lyrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct IngestLyricsParams {
    /// Lyrics text. Bracketed headers like `[Припев]` mark sections.
    pub text: String,
    /// Provenance tag (artist or song).
    pub source: Option<String>,
    /// Song identifier.
    pub song_id: Option<u64>,
    /// Pre-split sections; when given, `text` is not parsed for headers.
    pub sections: Option<Vec<SectionHint>>,
}

/// Parameters for the `import_lyrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ImportLyricsParams {
    /// Lyrics text.
    pub text: String,
    /// "my_lyrics" (style only) or "reference" (corpus and style).
    #[serde(default)]
    pub mode: ImportMode,
    /// Provenance tag for reference imports.
    pub source: Option<String>,
    /// Owner of the learned style. Defaults to the configured user.
    pub user_id: Option<String>,
}

/// Parameters for the `search_corpus` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchCorpusParams {
    /// Only lines with this theme.
    pub theme: Option<Theme>,
    /// Only lines with exactly this many syllables.
    pub syllables: Option<usize>,
    /// Only lines with this rhyme group (e.g. "O:ф").
    pub rhyme_ending: Option<String>,
    /// Only lines ending in a perfect rhyme of this word.
    pub rhymes_with: Option<String>,
    /// Only lines from this section.
    pub section: Option<Section>,
    /// Case-insensitive substring.
    pub query: Option<String>,
    /// Maximum lines. Defaults to the configured search limit.
    pub limit: Option<usize>,
}

/// Parameters for the `context_lines` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ContextLinesParams {
    /// Theme of the example lines.
    pub theme: Theme,
    /// Number of lines.
    #[serde(default = "default_context_count")]
    pub count: usize,
}

const fn default_context_count() -> usize {
    10
}

#[derive(Serialize)]
struct WordSignature<'a> {
    word: &'a str,
    #[serde(flatten)]
    signature: PhoneticSignature,
}

#[derive(Serialize)]
struct SyllableReport<'a> {
    #[serde(flatten)]
    breakdown: syllables::SyllableBreakdown,
    lines: Vec<LineSyllables<'a>>,
}

#[derive(Serialize)]
struct LineSyllables<'a> {
    line: &'a str,
    syllables: usize,
}

fn core_error(err: CoreError) -> McpError {
    match err {
        CoreError::InvalidArgument { .. } => McpError::invalid_params(err.to_string(), None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

/// Total byte size of a multi-part text payload.
fn payload_len<'a>(parts: impl IntoIterator<Item = &'a str>) -> usize {
    parts.into_iter().map(str::len).sum()
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP server over a shared lyric store.
#[derive(Clone)]
pub struct ProjectServer {
    store: Arc<MemoryStore>,
    store_path: Option<Utf8PathBuf>,
    rhyme_limit: usize,
    search_limit: usize,
    user_id: String,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()), None, &Config::default())
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server over `store`. Writes are saved to `store_path` if set.
    pub fn new(store: Arc<MemoryStore>, store_path: Option<Utf8PathBuf>, config: &Config) -> Self {
        Self {
            store,
            store_path,
            rhyme_limit: config.rhyme_limit,
            search_limit: config.corpus_search_limit,
            user_id: config.user_id.clone(),
            max_input_bytes: config.input_limit(),
            tool_router: Self::tool_router(),
        }
    }

    /// Replace the input size limit.
    #[must_use]
    pub fn with_max_input(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// The shared store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        self.check_input_len(text.len())
    }

    fn check_input_len(&self, len: usize) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && len > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            ));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), McpError> {
        if let Some(ref path) = self.store_path {
            self.store.save(path).map_err(|e| {
                McpError::internal_error(format!("failed to save store to {path}: {e}"), None)
            })?;
        }
        Ok(())
    }

    fn user<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.user_id)
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }));
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Tiered rhyme suggestions.
    #[tool(
        description = "Suggest rhymes for a Bulgarian word, bucketed into perfect, near, and slant tiers."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", word = %params.word))]
    fn find_rhymes(
        &self,
        Parameters(params): Parameters<FindRhymesParams>,
    ) -> Result<CallToolResult, McpError> {
        let candidates = params.candidates.iter().flatten().map(String::as_str);
        self.check_input_len(params.word.len() + payload_len(candidates))?;
        let limit = params.limit.unwrap_or(self.rhyme_limit);
        tracing::debug!(tool = "find_rhymes", limit, "executing MCP tool");

        let buckets = match params.candidates {
            Some(ref pool) => rhymes::find_rhymes(&params.word, pool, limit),
            None => rhymes::find_rhymes_in_store(&params.word, self.store.as_ref(), limit),
        }
        .map_err(core_error)?;

        tracing::info!(tool = "find_rhymes", found = buckets.len(), "MCP tool completed");
        to_json(&buckets)
    }

    /// Syllable counts.
    #[tool(description = "Count syllables in Bulgarian text: total, per word, and per line.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_input(&params.text)?;
        let lines = rimar_core::text::split_lines(&params.text)
            .into_iter()
            .map(|line| LineSyllables {
                line,
                syllables: syllables::count_line(line),
            })
            .collect();
        let report = SyllableReport {
            breakdown: syllables::breakdown(&params.text),
            lines,
        };
        tracing::info!(
            tool = "count_syllables",
            total = report.breakdown.total,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Phonetic signatures.
    #[tool(
        description = "Show the phonetic rhyme signature (ending, rhyme group, vowel class, consonant frame) of each word."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", count = params.words.len()))]
    fn phonetic_signature(
        &self,
        Parameters(params): Parameters<PhoneticSignatureParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_input_len(payload_len(params.words.iter().map(String::as_str)))?;
        let signatures: Vec<WordSignature<'_>> = params
            .words
            .iter()
            .map(|word| WordSignature {
                word,
                signature: extract_signature(word),
            })
            .collect();
        to_json(&signatures)
    }

    /// Style analysis.
    #[tool(
        description = "Analyze lyric style: top vocabulary, rhyme ending per line, and average syllables per line. Optionally store it for the user."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", save = params.save))]
    fn analyze_style(
        &self,
        Parameters(params): Parameters<AnalyzeStyleParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_input(&params.text)?;
        let analysis = style::analyze(&params.text);

        let mut value = serde_json::to_value(&analysis)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        if params.save {
            let user = self.user(params.user_id.as_deref());
            let stored =
                style::store_style_patterns(self.store.as_ref(), &params.text, &analysis, user)
                    .map_err(core_error)?;
            self.persist()?;
            value["patterns_stored"] = stored.into();
        }

        tracing::info!(
            tool = "analyze_style",
            vocabulary = analysis.vocabulary.len(),
            "MCP tool completed"
        );
        to_json(&value)
    }

    /// Stored style summary.
    #[tool(
        description = "Summarize a user's stored style (frequent words, syllables per line) as a short Bulgarian prompt fragment."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn style_context(
        &self,
        Parameters(params): Parameters<StyleContextParams>,
    ) -> Result<CallToolResult, McpError> {
        let user = self.user(params.user_id.as_deref());
        let summary = style::style_context(self.store.as_ref(), user).map_err(core_error)?;
        to_json(&serde_json::json!({ "user_id": user, "context": summary }))
    }

    /// Corpus ingestion.
    #[tool(
        description = "Add lyrics to the corpus: tag each line with language, theme, section, syllables, and rhyme ending, and mine new words for the rhyme pool."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn ingest_lyrics(
        &self,
        Parameters(params): Parameters<IngestLyricsParams>,
    ) -> Result<CallToolResult, McpError> {
        let hint_lines = params
            .sections
            .iter()
            .flatten()
            .flat_map(|hint| hint.lines.iter().map(String::as_str));
        self.check_input_len(params.text.len() + payload_len(hint_lines))?;
        let opts = corpus::IngestOptions {
            source: params.source,
            song_id: params.song_id,
            section_hints: params.sections,
        };
        let report = corpus::ingest(self.store.as_ref(), &KeywordThemes, &params.text, &opts)
            .map_err(core_error)?;
        self.persist()?;

        tracing::info!(
            tool = "ingest_lyrics",
            lines = report.lines_added,
            words = report.words_added,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Lyrics import.
    #[tool(
        description = "Import lyrics as the user's own writing (style only) or as reference material (corpus and style)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", mode = ?params.mode))]
    fn import_lyrics(
        &self,
        Parameters(params): Parameters<ImportLyricsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_input(&params.text)?;
        let user = self.user(params.user_id.as_deref());
        let outcome = import::import_text(
            self.store.as_ref(),
            &KeywordThemes,
            &params.text,
            params.mode,
            params.source.as_deref(),
            user,
        )
        .map_err(core_error)?;
        self.persist()?;
        to_json(&outcome)
    }

    /// Corpus search.
    #[tool(
        description = "Search corpus lines by theme, syllable count, rhyme ending (or a word to rhyme with), section, and substring."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn search_corpus(
        &self,
        Parameters(params): Parameters<SearchCorpusParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = LineFilter {
            theme: params.theme,
            syllables: params.syllables,
            rhyme_ending: params.rhyme_ending,
            section: params.section,
            query: params.query,
        };
        let limit = params.limit.unwrap_or(self.search_limit);
        let lines = match params.rhymes_with {
            Some(ref word) => {
                self.check_input(word)?;
                corpus::search_rhyming_lines(self.store.as_ref(), filter, word, limit)
            }
            None => corpus::search_lines(self.store.as_ref(), &filter, limit),
        }
        .map_err(core_error)?;

        tracing::info!(tool = "search_corpus", found = lines.len(), "MCP tool completed");
        to_json(&lines)
    }

    /// Few-shot example lines.
    #[tool(description = "Fetch example corpus lines for a theme, for use as few-shot context.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", theme = %params.theme))]
    fn context_lines(
        &self,
        Parameters(params): Parameters<ContextLinesParams>,
    ) -> Result<CallToolResult, McpError> {
        let lines = corpus::context_lines(self.store.as_ref(), params.theme, params.count)
            .map_err(core_error)?;
        to_json(&serde_json::json!({
            "theme": params.theme,
            "mood": params.theme.mood(),
            "lines": lines,
        }))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Rhymes, syllable counts, and a searchable corpus of Bulgarian lyrics.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
