//! # Rendering Module
//!
//! Turns command results into styled terminal text through minijinja templates.
//!
//! Layout math (width, truncation, padding, date wording) stays in Rust because it
//! needs Unicode-aware processing; templates receive ready-made strings plus a few
//! semantic flags and only decide structure and style names. The `style` filter maps
//! a style name to a `console` style from the active theme, or leaves the text plain
//! when the output does not support color.

use super::styles::{names, Theme};
use super::templates;
use chrono::{DateTime, Utc};
use console::Term;
use jotter::api::{CmdMessage, MessageLevel};
use jotter::config::JotterConfig;
use jotter::folders::FolderEntry;
use jotter::index::{index_hits, index_projection, DisplayIndex, DisplayNote};
use jotter::model::Note;
use jotter::projection::{EmptyState, Projection};
use jotter::query::{segments, summary, MatchSegment, SearchHit, Span};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 12;
pub const PIN_MARKER: &str = "⚲";

const LIST_TAG_LIMIT: usize = 2;
const GRID_TAG_LIMIT: usize = 3;
const GRID_PREVIEW_LINES: usize = 3;
const EXCERPT_CONTEXT: usize = 20;
const RULE_WIDTH: usize = 48;

#[derive(Serialize)]
struct EmptyData {
    title: &'static str,
    description: &'static str,
    action: Option<&'static str>,
}

impl From<EmptyState> for EmptyData {
    fn from(state: EmptyState) -> Self {
        Self {
            title: state.title(),
            description: state.description(),
            action: state.action_label(),
        }
    }
}

/// A note card, with layout pre-computed for both view modes.
#[derive(Serialize)]
struct CardData {
    left: &'static str,
    marker: &'static str,
    index: String,
    title: String,
    is_pinned: bool,
    // list view
    preview: String,
    padding: String,
    tags: String,
    date: String,
    // grid view
    indent: String,
    lines: Vec<String>,
    grid_tags: String,
    attachments: String,
}

#[derive(Serialize)]
struct HomeData<'a> {
    heading: &'a str,
    summary: String,
    query: &'a str,
    view: String,
    pinned: Vec<CardData>,
    unpinned: Vec<CardData>,
    unpinned_heading: Option<&'static str>,
    empty: Option<EmptyData>,
}

#[derive(Serialize)]
struct SegmentData {
    text: String,
    matched: bool,
}

#[derive(Serialize)]
struct HitData {
    index: String,
    indent: String,
    title: Vec<SegmentData>,
    content: Vec<SegmentData>,
    tags: Vec<Vec<SegmentData>>,
}

#[derive(Serialize)]
struct SearchData {
    summary: String,
    hits: Vec<HitData>,
    empty: Option<EmptyData>,
}

#[derive(Serialize)]
struct FolderLine {
    swatch: &'static str,
    name: String,
    padding: String,
    count: String,
}

#[derive(Serialize)]
struct FoldersData {
    summary: String,
    folders: Vec<FolderLine>,
    empty: Option<EmptyData>,
    unfiled: Option<String>,
    unfiled_padding: String,
}

#[derive(Serialize)]
struct PreviewNote {
    title: String,
    is_pinned: bool,
    folder: Option<String>,
    tags: String,
    content: String,
    created: String,
    updated: String,
    attachments: String,
}

#[derive(Serialize)]
struct PreviewData {
    note: PreviewNote,
    marker: &'static str,
    rule: String,
}

#[derive(Serialize)]
struct EditorData<'a> {
    heading: &'a str,
    title: &'a str,
    content: &'a str,
    dirty: bool,
    rule: String,
}

#[derive(Serialize)]
struct SettingLine {
    label: &'static str,
    padding: String,
    value: String,
    choices: String,
}

#[derive(Serialize)]
struct SettingsData {
    entries: Vec<SettingLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// A template environment bound to one theme and one color decision.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer that styles output only when stdout supports color.
    pub fn new(theme: &'static Theme) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(theme, use_color)
    }

    pub fn with_color(theme: &'static Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_loader(|name| Ok(templates::source(name).map(str::to_string)));
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The home screen: pinned group, then the rest, or an empty-state card.
    pub fn home(
        &self,
        projection: &Projection,
        heading: &str,
        query: &str,
        now: DateTime<Utc>,
    ) -> String {
        let listing = index_projection(projection);
        let (pinned, unpinned): (Vec<&DisplayNote>, Vec<&DisplayNote>) = listing
            .iter()
            .partition(|dn| matches!(dn.index, DisplayIndex::Pinned(_)));

        let count = projection.len();
        let data = HomeData {
            heading,
            summary: format!("{} note{}", count, if count == 1 { "" } else { "s" }),
            query,
            view: projection.view_mode.to_string(),
            pinned: pinned.into_iter().map(|dn| card(dn, now)).collect(),
            unpinned: unpinned.into_iter().map(|dn| card(dn, now)).collect(),
            unpinned_heading: projection.unpinned_heading(),
            empty: projection.empty_state(!query.is_empty()).map(EmptyData::from),
        };
        self.render("home", &data)
    }

    /// Search results with matched ranges highlighted, numbered 1..n.
    pub fn search(&self, hits: &[SearchHit], query: &str) -> String {
        let listing = index_hits(hits);
        let data = SearchData {
            summary: summary(hits.len(), query),
            hits: hits
                .iter()
                .zip(&listing)
                .map(|(hit, dn)| hit_data(hit, &dn.index))
                .collect(),
            empty: hits.is_empty().then(|| EmptyData::from(EmptyState::Search)),
        };
        self.render("search", &data)
    }

    pub fn folders(&self, folders: &[FolderEntry], unfiled_count: usize) -> String {
        let count_label = |n: usize| format!("{} note{}", n, if n == 1 { "" } else { "s" });
        let name_width = LINE_WIDTH / 2;

        let data = FoldersData {
            summary: format!(
                "{} folder{}",
                folders.len(),
                if folders.len() == 1 { "" } else { "s" }
            ),
            folders: folders
                .iter()
                .map(|f| {
                    let name = truncate_to_width(&f.name, name_width);
                    FolderLine {
                        swatch: "■",
                        padding: " ".repeat(name_width.saturating_sub(name.width()) + 2),
                        name,
                        count: count_label(f.note_count),
                    }
                })
                .collect(),
            empty: folders
                .is_empty()
                .then(|| EmptyData::from(EmptyState::Folders)),
            unfiled: (unfiled_count > 0).then(|| count_label(unfiled_count)),
            unfiled_padding: " ".repeat(name_width.saturating_sub("Unfiled".len()) + 4),
        };
        self.render("folders", &data)
    }

    pub fn preview(&self, note: &Note, folder_name: Option<&str>) -> String {
        let data = PreviewData {
            note: PreviewNote {
                title: note.title.clone(),
                is_pinned: note.is_pinned,
                folder: folder_name.map(str::to_string),
                tags: hashtags(&note.tags),
                content: note.content.clone(),
                created: format_full_date(note.created_at),
                updated: format_full_date(note.updated_at),
                attachments: attachments(note),
            },
            marker: PIN_MARKER,
            rule: "─".repeat(RULE_WIDTH),
        };
        self.render("preview", &data)
    }

    pub fn editor(&self, is_new: bool, title: &str, content: &str, dirty: bool) -> String {
        let data = EditorData {
            heading: if is_new { "New Note" } else { "Edit Note" },
            title,
            content,
            dirty,
            rule: "─".repeat(RULE_WIDTH),
        };
        self.render("editor", &data)
    }

    pub fn settings(&self, config: &JotterConfig) -> String {
        let label_width = 14;
        let entries = config
            .entries()
            .into_iter()
            .map(|(key, value)| {
                let label = setting_label(key);
                SettingLine {
                    label,
                    padding: " ".repeat(label_width - label.len()),
                    value,
                    choices: JotterConfig::choices(key)
                        .map(|c| format!("({})", c.join(" | ")))
                        .unwrap_or_default(),
                }
            })
            .collect();
        self.render("settings", &SettingsData { entries })
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Warning => names::WARNING,
                        MessageLevel::Error => names::ERROR,
                    },
                })
                .collect(),
        };
        self.render("messages", &data)
    }
}

fn setting_label(key: &str) -> &'static str {
    match key {
        "theme" => "Theme",
        "view-mode" => "View mode",
        "font-size" => "Font size",
        "font-style" => "Font style",
        _ => "",
    }
}

fn card(dn: &DisplayNote, now: DateTime<Utc>) -> CardData {
    let note = &dn.note;
    let is_pinned = matches!(dn.index, DisplayIndex::Pinned(_));
    let index = format!("{}. ", dn.index);

    // "  ⚲ " and "    " are both four columns wide
    let left = if is_pinned { "  " } else { "    " };
    let prefix_width = 4 + index.width();
    let date = format_card_date(note.updated_at, now);

    let list_tags = limited_hashtags(&note.tags, LIST_TAG_LIMIT);
    let tags = if list_tags.is_empty() {
        String::new()
    } else {
        format!("{}  ", list_tags)
    };

    let available = LINE_WIDTH.saturating_sub(prefix_width + tags.width() + TIME_WIDTH);
    let title = truncate_to_width(&note.title, available.saturating_sub(1));
    let room = available.saturating_sub(title.width() + 1);
    let preview = truncate_to_width(&flatten(&note.content), room);
    let padding = " ".repeat(room.saturating_sub(preview.width()));

    let line_width = LINE_WIDTH.saturating_sub(prefix_width);
    let mut lines: Vec<String> = note
        .content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| truncate_to_width(l.trim_end(), line_width))
        .collect();
    if lines.len() > GRID_PREVIEW_LINES {
        lines.truncate(GRID_PREVIEW_LINES);
        if let Some(last) = lines.last_mut() {
            if !last.ends_with('…') {
                last.push('…');
            }
        }
    }

    CardData {
        left,
        marker: PIN_MARKER,
        index,
        title,
        is_pinned,
        preview,
        padding,
        tags,
        date: format!("{:>width$}", date, width = TIME_WIDTH),
        indent: " ".repeat(prefix_width),
        lines,
        grid_tags: limited_hashtags(&note.tags, GRID_TAG_LIMIT),
        attachments: attachments(note),
    }
}

fn hit_data(hit: &SearchHit, index: &DisplayIndex) -> HitData {
    let index = format!("{}. ", index);
    let indent_width = index.width();
    let width = LINE_WIDTH.saturating_sub(indent_width);

    let note = &hit.note;
    let tags = hit
        .spans
        .tags
        .iter()
        .filter_map(|ts| {
            note.tags
                .get(ts.index)
                .map(|tag| to_segment_data(segments(tag, &ts.spans)))
        })
        .collect();

    HitData {
        indent: " ".repeat(indent_width),
        index,
        title: excerpt(&note.title, &hit.spans.title, width),
        content: if note.content.is_empty() {
            Vec::new()
        } else {
            excerpt(&flatten(&note.content), &hit.spans.content, width)
        },
        tags,
    }
}

/// A window of `text` at most `max_width` columns wide, split into plain and matched
/// segments. When the first match would fall outside the window, the window starts a
/// little before it instead.
fn excerpt(text: &str, spans: &[Span], max_width: usize) -> Vec<SegmentData> {
    let mut start = 0;
    if let Some(first) = spans.first() {
        if text[..first.end].width() > max_width {
            start = text[..first.start]
                .char_indices()
                .rev()
                .nth(EXCERPT_CONTEXT - 1)
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    let shifted: Vec<Span> = spans
        .iter()
        .filter(|s| s.start >= start)
        .map(|s| Span::new(s.start - start, s.end - start))
        .collect();

    let mut segs = to_segment_data(segments(&text[start..], &shifted));
    if start > 0 {
        segs.insert(
            0,
            SegmentData {
                text: "…".to_string(),
                matched: false,
            },
        );
    }
    clip_segments(segs, max_width)
}

fn to_segment_data(segs: Vec<MatchSegment>) -> Vec<SegmentData> {
    segs.into_iter()
        .map(|seg| match seg {
            MatchSegment::Plain(text) => SegmentData {
                text,
                matched: false,
            },
            MatchSegment::Match(text) => SegmentData {
                text,
                matched: true,
            },
        })
        .collect()
}

fn clip_segments(segs: Vec<SegmentData>, max_width: usize) -> Vec<SegmentData> {
    let total: usize = segs.iter().map(|s| s.text.width()).sum();
    if total <= max_width {
        return segs;
    }

    let mut budget = max_width.saturating_sub(1);
    let mut out = Vec::new();
    for seg in segs {
        let w = seg.text.width();
        if w <= budget {
            budget -= w;
            out.push(seg);
            continue;
        }
        let text = take_width(&seg.text, budget);
        if !text.is_empty() {
            out.push(SegmentData {
                text,
                matched: seg.matched,
            });
        }
        break;
    }
    out.push(SegmentData {
        text: "…".to_string(),
        matched: false,
    });
    out
}

fn take_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut result = take_width(s, max_width - 1);
    result.push('…');
    result
}

/// Newlines become spaces; byte offsets are unchanged.
fn flatten(text: &str) -> String {
    text.replace('\n', " ")
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn limited_hashtags(tags: &[String], limit: usize) -> String {
    let mut shown = hashtags(&tags[..tags.len().min(limit)]);
    if tags.len() > limit {
        shown.push_str(&format!(" +{}", tags.len() - limit));
    }
    shown
}

fn attachments(note: &Note) -> String {
    let mut parts = Vec::new();
    if note.has_image {
        parts.push("[image]");
    }
    if note.has_voice_note {
        parts.push("[voice]");
    }
    parts.join(" ")
}

/// Card date: calendar days between `timestamp` and `now`.
pub fn format_card_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - timestamp.date_naive()).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => timestamp.format("%b %-d").to_string(),
    }
}

pub fn format_full_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::styles::LIGHT_THEME;
    use chrono::{Duration, TimeZone};
    use jotter::model::{NoteId, ViewMode};
    use jotter::projection::project;
    use jotter::query::{search, FolderFilter};

    fn renderer() -> Renderer {
        Renderer::with_color(&LIGHT_THEME, false)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
    }

    fn make_note(id: &str, title: &str, content: &str, pinned: bool) -> Note {
        let mut note = Note::with_id(NoteId::from(id), title.into(), content.into());
        note.is_pinned = pinned;
        note.created_at = now();
        note.updated_at = now();
        note
    }

    #[test]
    fn card_dates() {
        let n = now();
        assert_eq!(format_card_date(n - Duration::hours(1), n), "Today");
        assert_eq!(format_card_date(n - Duration::days(1), n), "Yesterday");
        assert_eq!(format_card_date(n - Duration::days(3), n), "3 days ago");
        assert_eq!(format_card_date(n - Duration::days(30), n), "Feb 13");
    }

    #[test]
    fn full_date() {
        assert_eq!(
            format_full_date(now()),
            "Thursday, March 14, 2024 at 12:00 PM"
        );
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn home_groups_with_headings() {
        let notes = vec![
            make_note("1", "Regular", "body", false),
            make_note("2", "Pinned one", "", true),
        ];
        let output = renderer().home(&project(&notes, ViewMode::List), "All Notes", "", now());

        assert!(output.starts_with("All Notes  2 notes"));
        let pinned_at = output.find("Pinned\n").unwrap();
        let all_at = output.rfind("All Notes\n").unwrap();
        assert!(pinned_at < all_at);
        assert!(output.contains(&format!("  {} p1. Pinned one", PIN_MARKER)));
        assert!(output.contains("    1. Regular body"));
        assert!(output.contains("Today"));
    }

    #[test]
    fn list_lines_fit_the_line_width() {
        let long = "x".repeat(300);
        let mut note = make_note("1", &long, &long, false);
        note.tags = vec!["a".into(), "b".into(), "c".into()];
        let output = renderer().home(&project(&[note], ViewMode::List), "All Notes", "", now());

        let line = output.lines().find(|l| l.contains("1. ")).unwrap();
        assert_eq!(line.width(), LINE_WIDTH);
        assert!(line.contains("#a #b +1"));
    }

    #[test]
    fn grid_cards_show_preview_lines_and_tags() {
        let mut note = make_note("1", "Card", "one\ntwo\n\nthree\nfour", false);
        note.tags = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        note.has_image = true;
        let output = renderer().home(&project(&[note], ViewMode::Grid), "All Notes", "", now());

        assert!(output.contains("one\n"));
        assert!(output.contains("three…"));
        assert!(!output.contains("four"));
        assert!(output.contains("#a #b #c +1"));
        assert!(output.contains("[image]"));
    }

    #[test]
    fn empty_home_and_empty_search_cards() {
        let empty = project(&[], ViewMode::Grid);
        let output = renderer().home(&empty, "All Notes", "", now());
        assert!(output.contains("No notes yet"));
        assert!(output.contains("Create Note"));

        let output = renderer().home(&empty, "All Notes", "zzz", now());
        assert!(output.contains("No results found"));
        assert!(output.contains("Try searching with different keywords"));
    }

    #[test]
    fn search_highlights_are_marked_in_color() {
        let notes = vec![make_note("1", "Grocery List", "milk, eggs", false)];
        let hits = search(&notes, "milk", &FolderFilter::All);

        let plain = renderer().search(&hits, "milk");
        assert!(plain.contains("Found 1 result for \"milk\""));
        assert!(plain.contains("1. Grocery List"));
        assert!(plain.contains("milk, eggs"));

        let colored = Renderer::with_color(&LIGHT_THEME, true).search(&hits, "milk");
        let highlighted = LIGHT_THEME.apply(names::HIGHLIGHT, "milk", true);
        assert!(colored.contains(&highlighted));
    }

    #[test]
    fn search_excerpt_scrolls_to_a_late_match() {
        let content = format!("{} needle", "hay ".repeat(60));
        let notes = vec![make_note("1", "T", &content, false)];
        let hits = search(&notes, "needle", &FolderFilter::All);

        let output = renderer().search(&hits, "needle");
        let line = output.lines().find(|l| l.contains("needle")).unwrap();
        assert!(line.trim_start().starts_with('…'));
        assert!(line.width() <= LINE_WIDTH);
    }

    #[test]
    fn search_shows_only_matching_tags() {
        let mut note = make_note("1", "Plan", "", false);
        note.tags = vec!["work".into(), "home".into()];
        let hits = search(&[note], "work", &FolderFilter::All);

        let output = renderer().search(&hits, "work");
        assert!(output.contains("#work"));
        assert!(!output.contains("#home"));
    }

    #[test]
    fn clip_keeps_total_width() {
        let segs = vec![
            SegmentData {
                text: "abc".into(),
                matched: false,
            },
            SegmentData {
                text: "def".into(),
                matched: true,
            },
        ];
        let clipped = clip_segments(segs, 5);
        let text: String = clipped.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, "abcd…");
        assert!(clipped[1].matched);
    }

    #[test]
    fn folders_screen() {
        let folders = vec![FolderEntry {
            id: "w".into(),
            name: "Work".into(),
            color: "#3b82f6".into(),
            note_count: 1,
        }];
        let output = renderer().folders(&folders, 2);
        assert!(output.contains("1 folder"));
        assert!(output.contains("Work"));
        assert!(output.contains("1 note\n"));
        assert!(output.contains("Unfiled"));
        assert!(output.contains("2 notes"));

        let output = renderer().folders(&[], 0);
        assert!(output.contains("No folders yet"));
        assert!(!output.contains("Unfiled"));
    }

    #[test]
    fn preview_shows_metadata() {
        let mut note = make_note("1", "Title", "Line one\nLine two", true);
        note.tags = vec!["a".into()];
        let output = renderer().preview(&note, Some("Work"));

        assert!(output.starts_with(&format!("{} Title", PIN_MARKER)));
        assert!(output.contains("Folder: Work"));
        assert!(output.contains("Tags: #a"));
        assert!(output.contains("Line one\nLine two"));
        assert!(output.contains("Created  Thursday, March 14, 2024"));
    }

    #[test]
    fn editor_and_settings() {
        let output = renderer().editor(true, "Untitled Note", "", true);
        assert!(output.contains("New Note  (unsaved)"));
        assert!(output.contains("Start typing..."));

        let output = renderer().settings(&JotterConfig::default());
        assert!(output.contains("Theme"));
        assert!(output.contains("system  (light | dark | system)"));
        assert!(output.contains("extra-large"));
    }

    #[test]
    fn messages_use_level_styles() {
        assert!(renderer().messages(&[]).is_empty());
        let output = renderer().messages(&[
            CmdMessage::success("Note pinned"),
            CmdMessage::error("Failed to copy note"),
        ]);
        assert_eq!(output, "Note pinned\nFailed to copy note\n");
    }
}
